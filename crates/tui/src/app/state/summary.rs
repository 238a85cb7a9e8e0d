use super::panel::Panel;
use crate::app::system::{SettingsStore, SystemProbe};
use serde::Serialize;

pub const SUMMARY_MAX_CHARS: usize = 13;
pub const ELLIPSIS: &str = "...";

pub const WIFI_CONNECTED: &str = "Connected";
pub const WIFI_PROXY: &str = "Proxy enabled";
pub const WIFI_DISCONNECTED: &str = "Not connected";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    #[serde(skip)]
    pub panel: Panel,
    pub panel_name: &'static str,
    pub raw_value: Option<String>,
    pub displayed_value: Option<String>,
}

pub fn truncate_summary(value: &str) -> String {
    if value.chars().count() <= SUMMARY_MAX_CHARS {
        return value.to_string();
    }
    let kept: String = value.chars().take(SUMMARY_MAX_CHARS).collect();
    format!("{kept}{ELLIPSIS}")
}

pub fn wifi_summary(probe: &dyn SystemProbe) -> &'static str {
    if probe.has_internet() {
        WIFI_CONNECTED
    } else if probe.proxy_enabled() {
        WIFI_PROXY
    } else {
        WIFI_DISCONNECTED
    }
}

pub fn summarize(panel: Panel, store: &SettingsStore, probe: &dyn SystemProbe) -> SummaryEntry {
    let (raw_value, displayed_value) = match panel {
        Panel::Wifi => {
            let text = wifi_summary(probe).to_string();
            (Some(text.clone()), Some(text))
        }
        Panel::Account => {
            let user = probe.current_user();
            (Some(user.clone()), Some(user))
        }
        Panel::Display | Panel::Advanced => (None, None),
        _ => match panel.setting_key() {
            Some(key) => {
                let value = store.get(key);
                let displayed = truncate_summary(&value);
                (Some(value), Some(displayed))
            }
            None => (None, None),
        },
    };
    SummaryEntry {
        panel,
        panel_name: panel.name(),
        raw_value,
        displayed_value,
    }
}

/// One entry per panel, in menu order. Always reads fresh values.
pub fn summarize_all(store: &SettingsStore, probe: &dyn SystemProbe) -> Vec<SummaryEntry> {
    Panel::ALL
        .iter()
        .map(|panel| summarize(*panel, store, probe))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        summarize, summarize_all, truncate_summary, wifi_summary, SUMMARY_MAX_CHARS,
        WIFI_CONNECTED, WIFI_DISCONNECTED, WIFI_PROXY,
    };
    use crate::app::state::panel::Panel;
    use crate::app::system::store::{KEY_KEYBOARD_COUNTRY, KEY_WALLPAPER};
    use crate::app::system::testing::FixedProbe;
    use crate::app::system::SettingsStore;

    fn probe(internet: bool, proxy: bool) -> FixedProbe {
        FixedProbe {
            internet,
            proxy,
            user: "kano".to_string(),
        }
    }

    #[test]
    fn short_values_are_untouched() {
        assert_eq!(truncate_summary("Normal"), "Normal");
        assert_eq!(truncate_summary("exactly13char"), "exactly13char");
    }

    #[test]
    fn long_values_keep_thirteen_chars_plus_ellipsis() {
        let truncated = truncate_summary("United Kingdom of Great Britain");
        assert_eq!(truncated, "United Kingdo...");
        assert_eq!(truncated.chars().count(), SUMMARY_MAX_CHARS + 3);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let truncated = truncate_summary("ÁÉÍÓÚÁÉÍÓÚÁÉÍÓÚ");
        assert_eq!(truncated.chars().count(), 16);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn wifi_summary_prefers_connectivity_over_proxy() {
        assert_eq!(wifi_summary(&probe(true, true)), WIFI_CONNECTED);
        assert_eq!(wifi_summary(&probe(false, true)), WIFI_PROXY);
        assert_eq!(wifi_summary(&probe(false, false)), WIFI_DISCONNECTED);
    }

    #[test]
    fn display_and_advanced_have_no_summary() {
        let store = SettingsStore::in_memory();
        for panel in [Panel::Display, Panel::Advanced] {
            let entry = summarize(panel, &store, &probe(true, false));
            assert_eq!(entry.displayed_value, None);
        }
    }

    #[test]
    fn account_reports_user_without_truncation() {
        let store = SettingsStore::in_memory();
        let probe = FixedProbe {
            user: "a-very-long-user-name".to_string(),
            ..FixedProbe::default()
        };
        let entry = summarize(Panel::Account, &store, &probe);
        assert_eq!(entry.displayed_value.as_deref(), Some("a-very-long-user-name"));
    }

    #[test]
    fn stored_settings_are_read_on_every_call() {
        let mut store = SettingsStore::in_memory();
        let probe = probe(false, false);
        let before = summarize(Panel::Wallpaper, &store, &probe);
        assert_eq!(before.displayed_value.as_deref(), Some("kanux-backgro..."));

        store.set(KEY_WALLPAPER, "circuit").unwrap();
        let after = summarize(Panel::Wallpaper, &store, &probe);
        assert_eq!(after.displayed_value.as_deref(), Some("circuit"));
    }

    #[test]
    fn every_panel_gets_an_entry_in_order() {
        let mut store = SettingsStore::in_memory();
        store
            .set(KEY_KEYBOARD_COUNTRY, "United Kingdom")
            .unwrap();
        let entries = summarize_all(&store, &probe(false, true));
        assert_eq!(entries.len(), Panel::ALL.len());
        for (entry, panel) in entries.iter().zip(Panel::ALL) {
            assert_eq!(entry.panel, panel);
            if let Some(text) = entry.displayed_value.as_deref() {
                if panel != Panel::Account {
                    assert!(text.chars().count() <= 16);
                }
            }
        }
        assert_eq!(entries[0].raw_value.as_deref(), Some("United Kingdom"));
        assert_eq!(entries[0].displayed_value.as_deref(), Some("United Kingdo..."));
        assert_eq!(entries[4].displayed_value.as_deref(), Some(WIFI_PROXY));
    }
}
