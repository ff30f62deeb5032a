use figment::Jail;
use sense_config::{LOCAL_CONFIG_FILE, SenseConfig};
use sense_core::{GroupKey, SuccessProxy};
use std::path::PathBuf;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("STEAMSENSE_DATA__DIR", "/srv/steam");
        jail.set_env("STEAMSENSE_ANALYSIS__GROUP_BY", "publisher");
        jail.set_env("STEAMSENSE_OUTPUT__WIDTH", "1600");

        let config = SenseConfig::load().expect("config loads");
        assert_eq!(config.data.dir, PathBuf::from("/srv/steam"));
        assert_eq!(config.analysis.group_by, GroupKey::Publisher);
        assert_eq!(config.output.width, 1600);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            LOCAL_CONFIG_FILE,
            "[analysis]\nsuccess_proxy = \"owners\"\n",
        )?;
        jail.set_env("STEAMSENSE_ANALYSIS__SUCCESS_PROXY", "rating");

        let config = SenseConfig::load().expect("config loads");
        assert_eq!(config.analysis.success_proxy, SuccessProxy::Rating);
        Ok(())
    });
}

#[test]
fn log_filter_variable_does_not_break_extraction() {
    Jail::expect_with(|jail| {
        jail.set_env("STEAMSENSE_LOG", "debug");
        let config = SenseConfig::load().expect("unrelated keys are ignored");
        assert_eq!(config.analysis.group_by, GroupKey::Genre);
        Ok(())
    });
}
