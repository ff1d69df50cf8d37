//! Recording Session Tests
//!
//! Tests for the scoped chunk buffer lifecycle: start, push, stop, finish.

use flyover::errors::FlyoverError;
use flyover::recorder::RecordingSession;

#[test]
fn session_accumulates_chunks_in_order() {
    let mut session = RecordingSession::start();
    session.push_chunk(vec![1, 2, 3]).unwrap();
    session.push_chunk(vec![4]).unwrap();
    session.push_chunk(vec![5, 6]).unwrap();

    assert_eq!(session.chunk_count(), 3);
    assert_eq!(session.byte_len(), 6);
    assert_eq!(session.finish(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn sealed_session_rejects_chunks() {
    let mut session = RecordingSession::start();
    session.push_chunk(vec![1]).unwrap();
    session.stop();

    assert!(!session.is_active());
    assert!(matches!(
        session.push_chunk(vec![2]),
        Err(FlyoverError::RecordingStopped)
    ));
    // The buffered data survives the rejected push.
    assert_eq!(session.finish(), vec![1]);
}

#[test]
fn sessions_are_independent() {
    let mut first = RecordingSession::start();
    first.push_chunk(vec![9; 4]).unwrap();
    first.stop();

    // A second recording starts from an empty buffer.
    let second = RecordingSession::start();
    assert!(second.is_active());
    assert_eq!(second.chunk_count(), 0);
    assert!(second.finish().is_empty());
}

#[test]
fn empty_session_finishes_empty() {
    let session = RecordingSession::start();
    assert_eq!(session.byte_len(), 0);
    assert!(session.finish().is_empty());
}
