use super::panel::Panel;
use super::summary::wifi_summary;
use crate::app::system::audio::{self, AudioOutput};
use crate::app::system::store::{
    KEY_DEBUG_MODE, KEY_FONT, KEY_KEYBOARD_COUNTRY, KEY_KEYBOARD_LAYOUT, KEY_MOUSE,
    KEY_OVERCLOCKING, KEY_WALLPAPER,
};
use crate::app::system::{run_logged, Services};
use tracing::{info, warn};

pub struct KeyboardLayout {
    pub country: &'static str,
    pub code: &'static str,
}

const fn layout(country: &'static str, code: &'static str) -> KeyboardLayout {
    KeyboardLayout { country, code }
}

pub const KEYBOARD_LAYOUTS: &[KeyboardLayout] = &[
    layout("United States", "us"),
    layout("United Kingdom", "gb"),
    layout("Spain", "es"),
    layout("Latin America", "latam"),
    layout("France", "fr"),
    layout("Germany", "de"),
    layout("Italy", "it"),
    layout("Portugal", "pt"),
    layout("Brazil", "br"),
    layout("Japan", "jp"),
];

pub struct MouseSpeed {
    pub label: &'static str,
    pub acceleration: &'static str,
    pub threshold: &'static str,
}

const fn speed(
    label: &'static str,
    acceleration: &'static str,
    threshold: &'static str,
) -> MouseSpeed {
    MouseSpeed {
        label,
        acceleration,
        threshold,
    }
}

pub const MOUSE_SPEEDS: &[MouseSpeed] = &[
    speed("Slow", "1", "10"),
    speed("Normal", "2", "4"),
    speed("Fast", "4", "2"),
];

/// Clock presets, in MHz, plus the voltage step they need.
pub struct OverclockPreset {
    pub label: &'static str,
    pub arm_freq: u32,
    pub core_freq: u32,
    pub sdram_freq: u32,
    pub over_voltage: u32,
}

const fn preset(
    label: &'static str,
    arm_freq: u32,
    core_freq: u32,
    sdram_freq: u32,
    over_voltage: u32,
) -> OverclockPreset {
    OverclockPreset {
        label,
        arm_freq,
        core_freq,
        sdram_freq,
        over_voltage,
    }
}

pub const OVERCLOCK_PRESETS: &[OverclockPreset] = &[
    preset("None", 700, 250, 400, 0),
    preset("Modest", 800, 250, 400, 0),
    preset("Medium", 900, 250, 450, 2),
    preset("High", 950, 250, 450, 6),
    preset("Turbo", 1000, 500, 600, 6),
];

pub const WALLPAPERS: &[&str] = &[
    "kanux-background",
    "kanux-default",
    "kano-circuit",
    "kano-space",
    "kano-pixel-forest",
];

pub const FONT_SIZES: &[&str] = &["Small", "Normal", "Big"];
pub const DEBUG_MODES: &[&str] = &["Off", "On"];
const AUDIO_OUTPUTS: [AudioOutput; 2] = [AudioOutput::Hdmi, AudioOutput::Analogue];
const OVERSCAN_CHOICES: &[&str] = &["Overscan on", "Overscan off"];

pub struct PanelChoice {
    pub label: String,
    pub detail: Option<String>,
}

impl PanelChoice {
    fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
        }
    }

    fn with_detail(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail.into()),
        }
    }
}

pub struct PanelScreen {
    pub panel: Panel,
    pub description: &'static str,
    pub info: Vec<String>,
    pub choices: Vec<PanelChoice>,
    pub selected: usize,
    pub current: Option<usize>,
}

impl PanelScreen {
    fn new(panel: Panel, description: &'static str) -> Self {
        Self {
            panel,
            description,
            info: Vec::new(),
            choices: Vec::new(),
            selected: 0,
            current: None,
        }
    }

    fn with_choices(mut self, choices: Vec<PanelChoice>, current: Option<usize>) -> Self {
        self.choices = choices;
        self.current = current;
        self.selected = current.unwrap_or(0);
        self
    }

    fn with_info(mut self, info: Vec<String>) -> Self {
        self.info = info;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.choices.len() {
            self.selected += 1;
        }
    }
}

fn position_of(labels: impl IntoIterator<Item = &'static str>, value: &str) -> Option<usize> {
    labels.into_iter().position(|label| label == value)
}

fn overscan_disabled(services: &Services) -> bool {
    services.boot_config.get_value("disable_overscan").as_deref() == Some("1")
}

impl Panel {
    /// Builds this panel's screen from the current system state.
    pub fn open(self, services: &mut Services) -> PanelScreen {
        info!(panel = %self, "opening panel");
        match self {
            Self::Keyboard => {
                let stored = services.store.get(KEY_KEYBOARD_COUNTRY);
                PanelScreen::new(self, "Pick the country your keyboard comes from.").with_choices(
                    KEYBOARD_LAYOUTS
                        .iter()
                        .map(|layout| PanelChoice::with_detail(layout.country, layout.code))
                        .collect(),
                    position_of(KEYBOARD_LAYOUTS.iter().map(|layout| layout.country), &stored),
                )
            }
            Self::Mouse => {
                let stored = services.store.get(KEY_MOUSE);
                PanelScreen::new(self, "Choose how fast the pointer moves.").with_choices(
                    MOUSE_SPEEDS
                        .iter()
                        .map(|speed| PanelChoice::plain(speed.label))
                        .collect(),
                    position_of(MOUSE_SPEEDS.iter().map(|speed| speed.label), &stored),
                )
            }
            Self::Audio => {
                let hdmi_supported = audio::is_hdmi_audio_supported(services);
                let current = if audio::is_hdmi(services) {
                    AudioOutput::Hdmi
                } else {
                    AudioOutput::Analogue
                };
                let support = if hdmi_supported {
                    "This display can play sound over HDMI."
                } else {
                    "This display cannot play sound over HDMI."
                };
                PanelScreen::new(self, "Send sound to the TV or to the headphone jack.")
                    .with_info(vec![support.to_string()])
                    .with_choices(
                        AUDIO_OUTPUTS
                            .iter()
                            .map(|output| PanelChoice::plain(output.label()))
                            .collect(),
                        AUDIO_OUTPUTS.iter().position(|output| *output == current),
                    )
            }
            Self::Display => {
                let hdmi = if audio::is_hdmi_audio_supported(services) {
                    "HDMI audio: supported"
                } else {
                    "HDMI audio: not supported"
                };
                let disabled = overscan_disabled(services);
                let overscan = if disabled { "Overscan: off" } else { "Overscan: on" };
                PanelScreen::new(self, "Fit the picture to your screen. Applies after a reboot.")
                    .with_info(vec![hdmi.to_string(), overscan.to_string()])
                    .with_choices(
                        OVERSCAN_CHOICES
                            .iter()
                            .map(|label| PanelChoice::plain(*label))
                            .collect(),
                        Some(usize::from(disabled)),
                    )
            }
            Self::Wifi => PanelScreen::new(self, "Network connection status.")
                .with_info(vec![format!("Status: {}", wifi_summary(services.probe.as_ref()))]),
            Self::Overclocking => {
                let stored = services.store.get(KEY_OVERCLOCKING);
                PanelScreen::new(self, "Make the computer faster. Applies after a reboot.")
                    .with_choices(
                        OVERCLOCK_PRESETS
                            .iter()
                            .map(|preset| {
                                PanelChoice::with_detail(
                                    preset.label,
                                    format!(
                                        "{}MHz ARM, {}MHz core, {}MHz SDRAM, {} overvolt",
                                        preset.arm_freq,
                                        preset.core_freq,
                                        preset.sdram_freq,
                                        preset.over_voltage
                                    ),
                                )
                            })
                            .collect(),
                        position_of(OVERCLOCK_PRESETS.iter().map(|preset| preset.label), &stored),
                    )
            }
            Self::Account => PanelScreen::new(self, "The account you are using.")
                .with_info(vec![format!("Logged in as {}", services.probe.current_user())]),
            Self::Wallpaper => {
                let stored = services.store.get(KEY_WALLPAPER);
                PanelScreen::new(self, "Choose a desktop background.").with_choices(
                    WALLPAPERS.iter().map(|name| PanelChoice::plain(*name)).collect(),
                    position_of(WALLPAPERS.iter().copied(), &stored),
                )
            }
            Self::Font => {
                let stored = services.store.get(KEY_FONT);
                PanelScreen::new(self, "Make text easier to read.").with_choices(
                    FONT_SIZES.iter().map(|size| PanelChoice::plain(*size)).collect(),
                    position_of(FONT_SIZES.iter().copied(), &stored),
                )
            }
            Self::Advanced => {
                let stored = services.store.get(KEY_DEBUG_MODE);
                PanelScreen::new(self, "Debug mode keeps extra logs for troubleshooting.")
                    .with_choices(
                        DEBUG_MODES
                            .iter()
                            .map(|mode| PanelChoice::plain(format!("Debug mode {mode}")))
                            .collect(),
                        position_of(DEBUG_MODES.iter().copied(), &stored),
                    )
            }
        }
    }
}

fn store_setting(services: &mut Services, key: &str, value: &str) {
    if let Err(error) = services.store.set(key, value) {
        warn!("setting {key} not saved: {error}");
    }
}

fn finish_boot_config(services: &mut Services) {
    if let Err(error) = services.boot_config.end_transaction() {
        warn!("boot config not updated: {error}");
    }
}

/// Applies the highlighted choice. Returns a status line for the UI, or
/// `None` when the screen has nothing to apply.
pub fn apply_choice(screen: &mut PanelScreen, services: &mut Services) -> Option<String> {
    let index = screen.selected;
    screen.choices.get(index)?;
    let message = match screen.panel {
        Panel::Keyboard => {
            let layout = KEYBOARD_LAYOUTS.get(index)?;
            run_logged(
                services.runner.as_ref(),
                "setxkbmap",
                &format!("setxkbmap {}", layout.code),
            );
            store_setting(services, KEY_KEYBOARD_COUNTRY, layout.country);
            store_setting(services, KEY_KEYBOARD_LAYOUT, layout.code);
            format!("Keyboard set to {}", layout.country)
        }
        Panel::Mouse => {
            let speed = MOUSE_SPEEDS.get(index)?;
            run_logged(
                services.runner.as_ref(),
                "xset",
                &format!("xset m {} {}", speed.acceleration, speed.threshold),
            );
            store_setting(services, KEY_MOUSE, speed.label);
            format!("Mouse speed set to {}", speed.label)
        }
        Panel::Audio => {
            let wanted = *AUDIO_OUTPUTS.get(index)?;
            let applied = audio::set_to_hdmi(services, wanted == AudioOutput::Hdmi, false);
            screen.selected = AUDIO_OUTPUTS.iter().position(|output| *output == applied)?;
            if applied == wanted {
                format!("Audio set to {applied}")
            } else {
                format!("HDMI audio is not supported, using {applied}")
            }
        }
        Panel::Display => {
            let disable = index == 1;
            services
                .boot_config
                .set_value("disable_overscan", Some(if disable { "1" } else { "0" }));
            finish_boot_config(services);
            screen.info = vec![
                screen.info.first().cloned().unwrap_or_default(),
                if disable { "Overscan: off" } else { "Overscan: on" }.to_string(),
            ];
            format!("{} (reboot to apply)", OVERSCAN_CHOICES[index])
        }
        Panel::Overclocking => {
            let preset = OVERCLOCK_PRESETS.get(index)?;
            let config = &mut services.boot_config;
            config.set_value("arm_freq", Some(preset.arm_freq.to_string().as_str()));
            config.set_value("core_freq", Some(preset.core_freq.to_string().as_str()));
            config.set_value("sdram_freq", Some(preset.sdram_freq.to_string().as_str()));
            config.set_value("over_voltage", Some(preset.over_voltage.to_string().as_str()));
            finish_boot_config(services);
            store_setting(services, KEY_OVERCLOCKING, preset.label);
            format!("Overclocking set to {} (reboot to apply)", preset.label)
        }
        Panel::Wallpaper => {
            let name = WALLPAPERS.get(index)?;
            store_setting(services, KEY_WALLPAPER, name);
            format!("Wallpaper set to {name}")
        }
        Panel::Font => {
            let size = FONT_SIZES.get(index)?;
            store_setting(services, KEY_FONT, size);
            format!("Font size set to {size}")
        }
        Panel::Advanced => {
            let mode = DEBUG_MODES.get(index)?;
            store_setting(services, KEY_DEBUG_MODE, mode);
            format!("Debug mode {mode}")
        }
        Panel::Wifi | Panel::Account => return None,
    };
    screen.current = Some(screen.selected);
    info!(panel = %screen.panel, %message, "setting applied");
    Some(message)
}
