/// A plugin of the emulated surface.
///
/// Registration is accepted so that caller code keeps working; no plugin
/// changes any behavior here.
pub trait Plugin {
    fn name(&self) -> &str;
}

/// Satisfies references to the motion-path plugin. No operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionPathPlugin;

impl Plugin for MotionPathPlugin {
    fn name(&self) -> &str {
        "MotionPathPlugin"
    }
}
