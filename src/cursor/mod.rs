//! Cursor-paginated streaming
//!
//! Drives repeated select requests with an advancing `cursorMark` and
//! delivers each decoded page to the consumer as a lazy, ordered stream.
//!
//! # Protocol
//!
//! - `cursorMark` defaults to `*` when the caller did not set one
//! - one request is in flight at a time; the producer task waits for the
//!   consumer to take a page before fetching the next (single-slot
//!   rendezvous channel)
//! - the engine signals the end of results by echoing back the token it
//!   was given; that final page is not delivered
//! - any error is delivered as the last item and ends the stream
//! - dropping the stream cancels the producer task, including an
//!   in-flight request

mod stream;

pub use stream::CursorStream;
