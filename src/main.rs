use anyhow::Result;
use zeta_projection::{fit_modal_projection, report_fit, FitConfig, NativeWindow};

fn main() -> Result<()> {
    env_logger::init();

    let config = FitConfig::default();
    log::debug!("피팅 구성: {}", serde_json::to_string(&config)?);

    let fit = fit_modal_projection(&config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report_fit(&fit, &config, &mut out, &NativeWindow::default())
}
