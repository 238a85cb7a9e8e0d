//! Audio output routing: amixer route, alsa-store persistence and the
//! matching HDMI boot options.

use super::command::run_logged;
use super::store::KEY_AUDIO;
use super::Services;
use std::fmt;
use tracing::{info, warn};

pub const ANALOGUE_CMD: &str = "amixer -c 0 cset numid=3 1";
pub const HDMI_CMD: &str = "amixer -c 0 cset numid=3 2";
pub const AMIXER_GET_CMD: &str = "amixer -c 0 cget name='PCM Playback Route'";
pub const STORE_CMD: &str = "service alsa-store restart";
pub const HDMI_AUDIO_QUERY_CMD: &str = "tvservice -a";

const HDMI_VALUE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioOutput {
    Hdmi,
    Analogue,
}

impl AudioOutput {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hdmi => "HDMI",
            Self::Analogue => "Analogue",
        }
    }
}

impl fmt::Display for AudioOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hardware answers that only need asking once per run.
#[derive(Debug, Default)]
pub struct AudioCapabilities {
    hdmi_supported: Option<bool>,
}

fn hdmi_marker() -> String {
    format!(": values={HDMI_VALUE}")
}

/// True when the attached display reports HDMI audio. Cached after the first query.
pub fn is_hdmi_audio_supported(services: &mut Services) -> bool {
    if let Some(supported) = services.audio.hdmi_supported {
        return supported;
    }
    let supported = match services.runner.run(HDMI_AUDIO_QUERY_CMD) {
        Ok(output) if output.success() => output.stdout.contains("PCM supported"),
        Ok(output) => {
            warn!("error from tvservice: {} {}", output.stderr.trim_end(), output.status);
            false
        }
        Err(error) => {
            warn!("error from tvservice: {error}");
            false
        }
    };
    services.audio.hdmi_supported = Some(supported);
    supported
}

/// Routes audio to HDMI when asked and possible, otherwise to the jack.
/// Returns the output actually applied.
pub fn set_to_hdmi(services: &mut Services, hdmi: bool, force: bool) -> AudioOutput {
    let hdmi = hdmi && (force || is_hdmi_audio_supported(services));

    let (output, amixer_cmd) = if hdmi {
        services
            .boot_config
            .set_value("hdmi_ignore_edid_audio", None);
        services.boot_config.set_value("hdmi_drive", Some("2"));
        (AudioOutput::Hdmi, HDMI_CMD)
    } else {
        services
            .boot_config
            .set_value("hdmi_ignore_edid_audio", Some("1"));
        services.boot_config.set_value("hdmi_drive", None);
        (AudioOutput::Analogue, ANALOGUE_CMD)
    };
    if let Err(error) = services.boot_config.end_transaction() {
        warn!("boot config not updated: {error}");
    }

    run_logged(services.runner.as_ref(), "amixer", amixer_cmd);
    // alsa-store keeps the route across reboots in /var/lib/alsa/asound.state.
    run_logged(services.runner.as_ref(), "alsa-store", STORE_CMD);

    if let Err(error) = services.store.set(KEY_AUDIO, output.label()) {
        warn!("audio setting not saved: {error}");
    }
    info!(%output, "audio output applied");
    output
}

/// Reads the current route from amixer and keeps the stored setting in sync.
/// When the route could not be read, the stored setting is reported unchanged.
pub fn is_hdmi(services: &mut Services) -> bool {
    let route = run_logged(services.runner.as_ref(), "amixer", AMIXER_GET_CMD)
        .filter(|output| output.ran_ok());
    let Some(route) = route else {
        return services.store.get(KEY_AUDIO) == AudioOutput::Hdmi.label();
    };
    let output = if route.stdout.contains(&hdmi_marker()) {
        AudioOutput::Hdmi
    } else {
        AudioOutput::Analogue
    };
    if services.store.get(KEY_AUDIO) != output.label() {
        if let Err(error) = services.store.set(KEY_AUDIO, output.label()) {
            warn!("audio setting not saved: {error}");
        }
    }
    output == AudioOutput::Hdmi
}
