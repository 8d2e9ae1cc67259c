/// Identifies one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Display-refresh scheduling primitive supplied by the host.
pub trait FrameScheduler {
    /// Ask for a callback on the next refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending callback. Cancelling a handle that already fired (or never existed) is a
    /// no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) -> FrameHandle {
        (**self).request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        (**self).cancel_frame(handle);
    }
}
