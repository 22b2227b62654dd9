use std::process::Stdio;
use std::time::Duration;

use anyhow::Result;
use iptv_models::Config;
use tempfile::TempDir;
use tokio::process::{Child, Command};
use tokio::time::sleep;

#[derive(Debug)]
pub struct TestDaemon {
    pub base_url: String,
    pub data_dir: TempDir,
    process: Child,
}

impl TestDaemon {
    pub async fn kill(&mut self) -> Result<()> {
        self.process.kill().await?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigOverride {
    pub port: Option<u16>,
    pub mediaflow_url: Option<String>,
    pub mediaflow_psw: Option<String>,
}

/// Spawns the addon server binary against a throwaway data directory and
/// waits for it to come up.
pub async fn spawn_daemon(config_override: Option<ConfigOverride>) -> Result<TestDaemon> {
    let data_dir = tempfile::tempdir()?;
    let data_path = data_dir.path().to_string_lossy().to_string();

    let mut config = Config::default();
    config.server.bind = "127.0.0.1".to_string();
    config.data.dir = data_path.clone();
    if let Some(overrides) = config_override {
        if let Some(port) = overrides.port {
            config.server.port = port;
        }
        if let Some(url) = overrides.mediaflow_url {
            config.mediaflow.default_url = url;
        }
        if let Some(psw) = overrides.mediaflow_psw {
            config.mediaflow.default_psw = psw;
        }
    }

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--bin", "mediaflow-iptv-server"]);
    cmd.env("IPTV_SERVER__BIND", &config.server.bind);
    cmd.env("PORT", config.server.port.to_string());
    cmd.env("IPTV_DATA__DIR", &data_path);
    cmd.env("MEDIAFLOW_DEFAULT_URL", &config.mediaflow.default_url);
    cmd.env("MEDIAFLOW_DEFAULT_PSW", &config.mediaflow.default_psw);
    cmd.current_dir(std::env::current_dir()?);
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let process = cmd.spawn()?;

    // Wait for the server to start
    sleep(Duration::from_secs(3)).await;

    let base_url = format!("http://{}:{}", config.server.bind, config.server.port);

    Ok(TestDaemon {
        base_url,
        data_dir,
        process,
    })
}
