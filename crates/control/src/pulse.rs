use crate::{ControlError, VolumeControl};
use libpulse_binding as pulse;
use libpulse_binding::callbacks::ListResult;
use libpulse_binding::context::{Context, State};
use libpulse_binding::mainloop::standard::{IterateResult, Mainloop};
use libpulse_binding::operation::Operation;
use libpulse_binding::volume::{ChannelVolumes, Volume};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// bounds every wait on the mainloop
const MAX_ITERATIONS: usize = 100;

/// Volume of the PulseAudio server's default sink.
pub struct PulseVolume {
    mainloop: Mainloop,
    context: Context,
    sink: String,
    channels: u8,
}

impl PulseVolume {
    /// Connect to the PulseAudio server and resolve its default sink.
    ///
    /// # Errors
    ///
    /// Returns `ControlError::Device` if the server is unavailable, the
    /// connection times out, or there is no default sink.
    pub fn connect() -> Result<Self, ControlError> {
        let mut mainloop = Mainloop::new().ok_or_else(|| {
            ControlError::Device("Failed to create PulseAudio mainloop".to_string())
        })?;

        let mut context = Context::new(&mainloop, "hand-control").ok_or_else(|| {
            ControlError::Device("Failed to create PulseAudio context".to_string())
        })?;

        context
            .connect(None, pulse::context::FlagSet::NOFLAGS, None)
            .map_err(|e| {
                ControlError::Device(format!("Failed to connect to PulseAudio server: {}", e))
            })?;

        wait_ready(&mut mainloop, &context)?;

        let default_sink = Rc::new(RefCell::new(None));
        let slot = Rc::clone(&default_sink);
        let op = context.introspect().get_server_info(move |info| {
            *slot.borrow_mut() = info.default_sink_name.as_ref().map(|name| name.to_string());
        });
        wait_for(&mut mainloop, &op, "server info")?;
        let sink = default_sink
            .borrow_mut()
            .take()
            .ok_or_else(|| ControlError::Device("PulseAudio has no default sink".to_string()))?;

        let channels = Rc::new(Cell::new(0u8));
        let slot = Rc::clone(&channels);
        let op = context
            .introspect()
            .get_sink_info_by_name(&sink, move |result| {
                if let ListResult::Item(info) = result {
                    slot.set(info.volume.len());
                }
            });
        wait_for(&mut mainloop, &op, "sink info")?;
        let channels = channels.get();
        if channels == 0 {
            return Err(ControlError::Device(format!("sink {} not found", sink)));
        }

        log::info!("PulseAudio default sink {} ({} channels)", sink, channels);
        Ok(Self {
            mainloop,
            context,
            sink,
            channels,
        })
    }

    pub fn sink(&self) -> &str {
        &self.sink
    }
}

impl VolumeControl for PulseVolume {
    fn set_level(&mut self, level: f32) -> Result<(), ControlError> {
        if !(0.0..=1.0).contains(&level) {
            return Err(ControlError::Range(format!("volume level {level} not in [0, 1]")));
        }

        let raw = Volume((level * Volume::NORMAL.0 as f32).round() as u32);
        let mut volumes = ChannelVolumes::default();
        volumes.set(self.channels, raw);

        let mut introspect = self.context.introspect();
        let op = introspect.set_sink_volume_by_name(&self.sink, &volumes, None);
        wait_for(&mut self.mainloop, &op, "set volume")?;
        log::trace!("volume {:.3} -> {}", level, raw.0);
        Ok(())
    }

    fn range(&mut self) -> Result<(f32, f32), ControlError> {
        log::debug!("raw volume range {}..{}", Volume::MUTED.0, Volume::NORMAL.0);
        Ok((0.0, 1.0))
    }
}

impl Drop for PulseVolume {
    fn drop(&mut self) {
        self.context.disconnect();
    }
}

fn wait_ready(mainloop: &mut Mainloop, context: &Context) -> Result<(), ControlError> {
    for _ in 0..MAX_ITERATIONS {
        match mainloop.iterate(true) {
            IterateResult::Quit(_) | IterateResult::Err(_) => {
                return Err(ControlError::Device(
                    "PulseAudio mainloop error during connection".to_string(),
                ));
            }
            IterateResult::Success(_) => {}
        }

        match context.get_state() {
            State::Ready => return Ok(()),
            State::Failed | State::Terminated => {
                return Err(ControlError::Device(
                    "PulseAudio connection failed or terminated".to_string(),
                ));
            }
            _ => {}
        }
    }
    Err(ControlError::Device(
        "PulseAudio server unavailable or connection timed out".to_string(),
    ))
}

fn wait_for<F: ?Sized>(
    mainloop: &mut Mainloop,
    op: &Operation<F>,
    what: &str,
) -> Result<(), ControlError> {
    for _ in 0..MAX_ITERATIONS {
        match mainloop.iterate(true) {
            IterateResult::Quit(_) | IterateResult::Err(_) => {
                return Err(ControlError::Device(format!("Mainloop error during {}", what)));
            }
            IterateResult::Success(_) => {}
        }
        match op.get_state() {
            pulse::operation::State::Done => return Ok(()),
            pulse::operation::State::Cancelled => {
                return Err(ControlError::Device(format!("{} cancelled", what)));
            }
            pulse::operation::State::Running => {}
        }
    }
    Err(ControlError::Device(format!("{} timed out", what)))
}
