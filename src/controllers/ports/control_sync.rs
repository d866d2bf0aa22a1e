use crate::core::fractals::mandelbrot::view::{MandelbrotPreset, MandelbrotViewSnapshot};

/// A user-facing change to the Mandelbrot view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewChange {
    CenterX(f64),
    CenterY(f64),
    Zoom(f64),
    MaxIterations(u32),
    Preset(MandelbrotPreset),
}

/// Pushes view values back to the controls after a preset. Any change events
/// the controls emit in response are returned so the explorer can dispatch
/// them; they arrive while a render is in progress and are suppressed.
pub trait ControlSyncPort {
    fn sync(&mut self, snapshot: &MandelbrotViewSnapshot) -> Vec<ViewChange>;
}

/// For headless use: there are no controls to update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoControlSync;

impl ControlSyncPort for NoControlSync {
    fn sync(&mut self, _snapshot: &MandelbrotViewSnapshot) -> Vec<ViewChange> {
        Vec::new()
    }
}
