//! Logger bootstrap.
//!
//! Every crate in the workspace logs through the `log` facade; this installs
//! the `fern` dispatcher behind it.  Natively records go to stdout, in the
//! browser to the devtools console.

use log::LevelFilter;

/// Install the global logger.  Fails if one is already installed.
pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    #[cfg(not(target_arch = "wasm32"))]
    let dispatch = dispatch.chain(std::io::stdout());

    #[cfg(target_arch = "wasm32")]
    let dispatch = dispatch.chain(fern::Output::call(console_output));

    dispatch.apply()?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn console_output(record: &log::Record) {
    let line = wasm_bindgen::JsValue::from_str(&record.args().to_string());
    match record.level() {
        log::Level::Error => web_sys::console::error_1(&line),
        log::Level::Warn => web_sys::console::warn_1(&line),
        _ => web_sys::console::log_1(&line),
    }
}
