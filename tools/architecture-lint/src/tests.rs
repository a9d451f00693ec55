//! Unit tests for the layer rules.

use std::path::PathBuf;

use rstest::{fixture, rstest};

use super::*;

#[derive(Clone, Copy)]
struct LintSingle;

impl LintSingle {
    fn lint(self, file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
        lint_sources(&[LintSource {
            file: PathBuf::from(file),
            contents: contents.to_owned(),
        }])
    }
}

#[fixture]
fn lint_single() -> LintSingle {
    LintSingle
}

#[rstest]
#[case::ui_reads_the_domain(
    "ui/pages/address_book.rs",
    "use crate::domain::Address; fn row(_: &Address) {}",
    true
)]
#[case::ui_reads_the_context("ui/pages/admin.rs", "use crate::context::AppContext;", true)]
#[case::ui_imports_outbound(
    "ui/pages/address_book.rs",
    "fn page() { let _ = crate::outbound::http::HttpAddressService::new; }",
    false
)]
#[case::ui_imports_outbound_by_crate_name("ui/layout.rs", "use portal::outbound::http::ApiClient;", false)]
#[case::ui_reads_settings("ui/view.rs", "use crate::settings::PortalSettings;", false)]
#[case::domain_imports_ui("domain/address.rs", "use crate::ui::View;", false)]
#[case::domain_imports_clap("domain/locale.rs", "use clap::ValueEnum;", false)]
#[case::navigation_file_module("navigation.rs", "use crate::outbound::http;", false)]
#[case::navigation_reads_serde("navigation/menu.rs", "use serde::Serialize;", true)]
#[case::outbound_imports_ui("outbound/http/address.rs", "use super::super::super::ui::View;", false)]
#[case::outbound_uses_reqwest(
    "outbound/http/api_client.rs",
    "use reqwest::Client; use crate::domain::ports::RemoteCallError;",
    true
)]
#[case::outbound_reads_settings("outbound/http/api_client.rs", "use crate::settings::LogFormat;", false)]
#[case::context_holds_domain_ports("context.rs", "use crate::domain::ports::AddressService;", true)]
#[case::context_builds_http_adapter("context.rs", "use crate::outbound::http::ApiClient;", false)]
#[case::context_uses_reqwest("context.rs", "fn f() { let _ = reqwest::Client::new; }", false)]
#[case::settings_parse_urls("settings.rs", "use ortho_config::OrthoConfig; use url::Url;", true)]
#[case::settings_read_locales("settings.rs", "use crate::domain::DateTimeLocale;", true)]
#[case::settings_install_subscriber("settings.rs", "use tracing_subscriber::fmt;", false)]
#[case::settings_parse_cli("settings.rs", "use clap::Parser;", false)]
#[case::settings_reach_ui("settings.rs", "use crate::ui::View;", false)]
#[case::telemetry_reads_log_format(
    "telemetry.rs",
    "use crate::settings::LogFormat; use tracing_subscriber::EnvFilter;",
    true
)]
#[case::telemetry_loads_config("telemetry.rs", "use ortho_config::OrthoConfig;", false)]
#[case::telemetry_reads_domain("telemetry.rs", "use crate::domain::UserId;", false)]
fn applies_the_layer_rules(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
#[case::binary("main.rs", "use clap::Parser; use reqwest::Client; fn main() {}")]
#[case::crate_root("lib.rs", "pub mod outbound; pub use outbound::http::ApiClient;")]
fn files_outside_a_layer_are_skipped(lint_single: LintSingle, #[case] file: &str, #[case] contents: &str) {
    assert!(lint_single.lint(file, contents).is_ok());
}

#[rstest]
fn unparsable_sources_report_the_file(lint_single: LintSingle) {
    let result = lint_single.lint("ui/view.rs", "fn broken(");
    let Err(ArchitectureLintError::Parse { file, .. }) = result else {
        panic!("expected a parse error, got: {result:?}");
    };
    assert_eq!(file, PathBuf::from("ui/view.rs"));
}

#[rstest]
fn repeated_imports_are_reported_once(lint_single: LintSingle) {
    let result = lint_single.lint(
        "domain/address.rs",
        "use crate::ui::View; use crate::ui::LayoutShell; fn f() { let _ = crate::ui::View::text; }",
    );
    let Err(ArchitectureLintError::Violations(violations)) = result else {
        panic!("expected violations, got: {result:?}");
    };
    assert_eq!(
        violations,
        [Violation {
            file: PathBuf::from("domain/address.rs"),
            layer: Layer::Domain,
            message: "domain must not use crate::ui".to_owned(),
        }]
    );
}

#[rstest]
fn violation_reports_render_one_line_each() {
    let error = ArchitectureLintError::Violations(vec![
        Violation {
            file: PathBuf::from("ui/view.rs"),
            layer: Layer::Ui,
            message: "ui must not use external crate `reqwest`".to_owned(),
        },
        Violation {
            file: PathBuf::from("context.rs"),
            layer: Layer::Context,
            message: "context must not use crate::outbound".to_owned(),
        },
    ]);
    assert_eq!(
        error.to_string(),
        concat!(
            "architecture boundary violations:\n",
            "- ui/view.rs: ui must not use external crate `reqwest`\n",
            "- context.rs: context must not use crate::outbound",
        )
    );
}

#[rstest]
fn every_layer_has_a_rule_for_itself() {
    for layer in Layer::ALL {
        let rule = layer.rule();
        assert_eq!(rule.layer, layer);
        assert!(!rule.bans_layer(layer), "{layer} may use itself");
        assert!(!rule.may_use.contains(&layer), "{layer} lists itself");
    }
}

#[rstest]
fn the_portal_tree_respects_its_layers() {
    let root = workspace_root(Path::new(env!("CARGO_MANIFEST_DIR"))).expect("workspace root");
    let outcome = lint_workspace(&root);
    assert!(outcome.is_ok(), "{}", outcome.map_or_else(|err| err.to_string(), |()| String::new()));
}
