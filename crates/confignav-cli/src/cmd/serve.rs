use anyhow::Context;
use confignav_core::config::NavConfig;
use confignav_server::ServerSettings;

pub fn run(config: &NavConfig, bind: &str, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let settings = ServerSettings::from(config);
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
            .await
            .with_context(|| format!("failed to bind {bind}:{port}"))?;
        let actual_port = listener.local_addr()?.port();
        println!(
            "confignav → http://{bind}:{actual_port}/goto  (PID {})",
            std::process::id()
        );

        tokio::select! {
            res = confignav_server::serve_on(settings, listener, open_browser) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
