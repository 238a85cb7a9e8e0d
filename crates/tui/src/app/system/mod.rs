pub(crate) mod audio;
pub(crate) mod boot_config;
pub(crate) mod command;
pub(crate) mod probe;
pub(crate) mod store;

pub(crate) use audio::AudioCapabilities;
pub(crate) use boot_config::BootConfig;
pub(crate) use command::{run_logged, CommandRunner, ShellRunner};
pub(crate) use probe::{LiveProbe, SystemProbe};
pub(crate) use store::SettingsStore;

/// Everything a panel needs to read or apply settings.
pub struct Services {
    pub store: SettingsStore,
    pub boot_config: BootConfig,
    pub runner: Box<dyn CommandRunner>,
    pub probe: Box<dyn SystemProbe>,
    pub audio: AudioCapabilities,
}

impl Services {
    pub fn new(
        store: SettingsStore,
        boot_config: BootConfig,
        runner: Box<dyn CommandRunner>,
        probe: Box<dyn SystemProbe>,
    ) -> Self {
        Self {
            store,
            boot_config,
            runner,
            probe,
            audio: AudioCapabilities::default(),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::command::{CommandError, CommandOutput};
    use super::{BootConfig, CommandRunner, Services, SettingsStore, SystemProbe};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Records every command and replies with canned output (success by default).
    #[derive(Clone, Default)]
    pub(crate) struct RecordingRunner {
        calls: Rc<RefCell<Vec<String>>>,
        responses: Rc<RefCell<HashMap<String, CommandOutput>>>,
    }

    impl RecordingRunner {
        pub(crate) fn respond(&self, command: &str, output: CommandOutput) {
            self.responses
                .borrow_mut()
                .insert(command.to_string(), output);
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str) -> Result<CommandOutput, CommandError> {
            self.calls.borrow_mut().push(command.to_string());
            Ok(self
                .responses
                .borrow()
                .get(command)
                .cloned()
                .unwrap_or_default())
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct FixedProbe {
        pub(crate) internet: bool,
        pub(crate) proxy: bool,
        pub(crate) user: String,
    }

    impl SystemProbe for FixedProbe {
        fn has_internet(&self) -> bool {
            self.internet
        }

        fn proxy_enabled(&self) -> bool {
            self.proxy
        }

        fn current_user(&self) -> String {
            self.user.clone()
        }
    }

    pub(crate) fn services_with(runner: &RecordingRunner, probe: FixedProbe) -> Services {
        Services::new(
            SettingsStore::in_memory(),
            BootConfig::in_memory(""),
            Box::new(runner.clone()),
            Box::new(probe),
        )
    }

    pub(crate) fn offline_services() -> (Services, RecordingRunner) {
        let runner = RecordingRunner::default();
        let probe = FixedProbe {
            user: "kano".to_string(),
            ..FixedProbe::default()
        };
        (services_with(&runner, probe), runner)
    }
}
