//! Capabilities the playback engine requires from its host.

use crate::LoadRequest;
use storyreel_core::Position;

/// Presentation host notified of committed navigation.
///
/// `on_next`/`on_previous` fire exactly once per committed transition that lands
/// on an open position. `on_close` fires exactly once per session, on explicit
/// close or when the sequence is exhausted at either end.
pub trait PlaybackHost {
    /// The player was dismissed or ran off either end of the collection.
    fn on_close(&mut self);

    /// A forward transition committed at `position`.
    fn on_next(&mut self, position: Position);

    /// A backward transition committed at `position`.
    fn on_previous(&mut self, position: Position);
}

impl<H: PlaybackHost + ?Sized> PlaybackHost for &mut H {
    fn on_close(&mut self) {
        (**self).on_close();
    }

    fn on_next(&mut self, position: Position) {
        (**self).on_next(position);
    }

    fn on_previous(&mut self, position: Position) {
        (**self).on_previous(position);
    }
}

/// Host that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl PlaybackHost for NoopHost {
    fn on_close(&mut self) {}
    fn on_next(&mut self, _position: Position) {}
    fn on_previous(&mut self, _position: Position) {}
}

/// Loads image content and reports completion through the request's signal.
///
/// A loader that never signals leaves the image stalled: its timer never
/// activates and playback does not advance on its own.
pub trait ImageLoader {
    /// Begin loading the requested image.
    fn load(&mut self, request: LoadRequest);
}

impl<L: ImageLoader + ?Sized> ImageLoader for Box<L> {
    fn load(&mut self, request: LoadRequest) {
        (**self).load(request);
    }
}

/// Loader that reports every image as loaded immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateLoader;

impl ImageLoader for ImmediateLoader {
    fn load(&mut self, request: LoadRequest) {
        request.into_signal().loaded();
    }
}
