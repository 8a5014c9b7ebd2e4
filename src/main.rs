use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};
use lib_othello::prelude::*;

fn main() -> Result<()> {
    // Initialize program options and environment; a missing .env file is fine.
    dotenvy::dotenv().ok();
    let options = OTPServerOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.clone().unwrap_or("info".into()).as_str())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(
            match cfg!(debug_assertions) {
                true => AdaptiveFormat::WithThread,
                _    => AdaptiveFormat::Default
            })
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?;

    // Serve OTP and the Othello engine.
    log::info!("searching {} plies deep", options.depth);
    let result = OTPServer::new(options).run();
    if let Err(e) = &result {
        log::error!("fatal error: {:#}", e);
    }
    result
}
