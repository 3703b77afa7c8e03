use super::*;

/// Replay timestamped inputs against a `Debouncer`, firing each push's
/// timer `delay` ms later. Returns `(settled_at, value)` pairs.
fn replay(inputs: &[(u64, &'static str)], delay: u64) -> Vec<(u64, &'static str)> {
    let mut debouncer = Debouncer::new();
    let mut timers: Vec<(u64, DebounceTicket)> = Vec::new();
    let mut settled = Vec::new();
    let mut pending_inputs = inputs.iter().peekable();

    loop {
        let next_input = pending_inputs.peek().map(|(at, _)| *at);
        let next_timer = timers.iter().map(|(at, _)| *at).min();
        match (next_input, next_timer) {
            (None, None) => break,
            (Some(at), timer) if timer.is_none_or(|t| at <= t) => {
                let (_, value) = pending_inputs.next().unwrap();
                timers.push((at + delay, debouncer.push(*value)));
            }
            (_, Some(fire_at)) => {
                let idx = timers.iter().position(|(at, _)| *at == fire_at).unwrap();
                let (_, ticket) = timers.remove(idx);
                if let Some(value) = debouncer.settle(ticket) {
                    settled.push((fire_at, value));
                }
            }
            (Some(_), None) => unreachable!(),
        }
    }
    settled
}

// =============================================================
// Debouncer core
// =============================================================

#[test]
fn newest_ticket_settles_latest_value() {
    let mut d = Debouncer::new();
    let first = d.push("r");
    let second = d.push("ru");
    assert_eq!(d.settle(first), None);
    assert!(d.is_pending());
    assert_eq!(d.settle(second), Some("ru"));
    assert!(!d.is_pending());
}

#[test]
fn ticket_settles_at_most_once() {
    let mut d = Debouncer::new();
    let ticket = d.push(1);
    assert_eq!(d.settle(ticket), Some(1));
    assert_eq!(d.settle(ticket), None);
}

#[test]
fn cancel_invalidates_outstanding_ticket() {
    let mut d = Debouncer::new();
    let ticket = d.push("rust");
    d.cancel();
    assert!(!d.is_pending());
    assert_eq!(d.settle(ticket), None);
}

// =============================================================
// Timing behavior
// =============================================================

#[test]
fn burst_of_keystrokes_settles_once_after_quiet_period() {
    let settled = replay(&[(0, "r"), (100, "ru"), (200, "rus"), (250, "rust")], 300);
    assert_eq!(settled, vec![(550, "rust")]);
}

#[test]
fn pauses_longer_than_delay_settle_each_value() {
    let settled = replay(&[(0, "go"), (400, "rust")], 300);
    assert_eq!(settled, vec![(300, "go"), (700, "rust")]);
}

#[test]
fn input_arriving_exactly_at_deadline_supersedes() {
    // The input is processed before the timer due at the same instant.
    let settled = replay(&[(0, "a"), (300, "ab")], 300);
    assert_eq!(settled, vec![(600, "ab")]);
}

#[test]
fn settled_value_is_always_last_input() {
    let sequences: [&[(u64, &'static str)]; 3] = [
        &[(0, "x")],
        &[(0, "a"), (10, "b"), (20, "c"), (30, "d")],
        &[(0, "a"), (299, "b"), (598, "c")],
    ];
    for inputs in sequences {
        let settled = replay(inputs, 300);
        let last_input = inputs.last().unwrap();
        assert_eq!(settled.last(), Some(&(last_input.0 + 300, last_input.1)));
    }
}
