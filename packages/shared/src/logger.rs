//! Logging setup utilities for the Cursorsync binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose log output is enabled by the default filter.
const WORKSPACE_CRATES: &[&str] = &["cursorsync_shared", "cursorsync_server", "cursorsync_client"];

/// Build the default `EnvFilter` directive string.
///
/// Every workspace crate and the binary itself log at `default_log_level`;
/// everything else (tokio, hyper, tungstenite, ...) stays silent.
fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    let mut targets: Vec<&str> = WORKSPACE_CRATES.to_vec();
    if !targets.contains(&binary_target.as_str()) {
        targets.push(&binary_target);
    }

    targets
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "cursorsync-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use cursorsync_shared::logger::setup_logger;
///
/// setup_logger("cursorsync-server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_include_workspace_and_binary() {
        // テスト項目: デフォルトのフィルタにワークスペースの crate とバイナリが含まれる
        // given (前提条件):
        let binary_name = "cursorsync-server";

        // when (操作):
        let directives = default_directives(binary_name, "debug");

        // then (期待する結果): 同じ crate が重複して含まれない
        assert_eq!(
            directives,
            "cursorsync_shared=debug,cursorsync_server=debug,cursorsync_client=debug"
        );
    }

    #[test]
    fn test_default_directives_append_unknown_binary() {
        // テスト項目: ワークスペース外のバイナリ名はハイフンを変換して追加される
        // given (前提条件):
        let binary_name = "presence-probe";

        // when (操作):
        let directives = default_directives(binary_name, "info");

        // then (期待する結果):
        assert!(directives.ends_with(",presence_probe=info"));
        assert!(directives.starts_with("cursorsync_shared=info"));
    }
}
