use gridfn_value::Value;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn partials_do_not_terminate() {
	let mut sink = Vec::new();
	let mut sender = ResultSender::new(&mut sink);
	sender.send_partial("a").unwrap();
	sender.send_partial("b").unwrap();
	assert_eq!(sender.state(), SenderState::Open);
	assert_eq!(sender.partials_sent(), 2);
	sender.send_final(3i32).unwrap();
	assert_eq!(sender.state(), SenderState::Terminated(Terminal::Final));

	assert_eq!(
		sink,
		vec![
			SenderEvent::Partial(Value::from("a")),
			SenderEvent::Partial(Value::from("b")),
			SenderEvent::Last(Value::Int(3)),
		]
	);
}

#[test]
fn sends_after_final_are_rejected() {
	let mut sink = Vec::new();
	let mut sender = ResultSender::new(&mut sink);
	sender.send_final(true).unwrap();

	let expected = Err(SendError::AlreadyTerminated(Terminal::Final));
	assert_eq!(sender.send_partial(1i32), expected);
	assert_eq!(sender.send_final(2i32), expected);
	assert_eq!(sender.send_exception("late"), expected);
	assert_eq!(sink, vec![SenderEvent::Last(Value::Bool(true))]);
}

#[test]
fn sends_after_exception_are_rejected() {
	let mut sink = Vec::new();
	let mut sender = ResultSender::new(&mut sink);
	sender.send_exception("boom").unwrap();
	assert!(sender.is_terminated());

	let err = sender.send_final(Value::Null).unwrap_err();
	assert_eq!(err, SendError::AlreadyTerminated(Terminal::Exception));
	assert_eq!(err.to_string(), "result sender already terminated by exception");
	assert_eq!(sink, vec![SenderEvent::Exception("boom".into())]);
}

#[test]
fn only_partial_events_are_non_terminal() {
	assert!(!SenderEvent::Partial(Value::Null).is_terminal());
	assert!(SenderEvent::Last(Value::Null).is_terminal());
	assert!(SenderEvent::Exception(String::new()).is_terminal());
}
