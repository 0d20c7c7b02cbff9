use super::*;

const DAY_MS: i64 = 86_400_000;

#[test]
fn splits_remaining_time_into_units() {
    let target = 10 * DAY_MS;
    let now = target - (2 * DAY_MS + 3 * 3_600_000 + 4 * 60_000 + 5_000);
    assert_eq!(
        countdown(target, now),
        CountdownState::Upcoming(Countdown { days: 2, hours: 3, minutes: 4, seconds: 5 })
    );
}

#[test]
fn partial_seconds_round_down() {
    assert_eq!(
        countdown(1_999, 0),
        CountdownState::Upcoming(Countdown { seconds: 1, ..Countdown::default() })
    );
}

#[test]
fn reaching_the_target_means_started() {
    assert_eq!(countdown(5_000, 5_000), CountdownState::Started);
    assert_eq!(countdown(5_000, 9_000), CountdownState::Started);
}

#[test]
fn final_partial_second_is_still_upcoming() {
    assert_eq!(countdown(5_000, 4_001), CountdownState::Upcoming(Countdown::default()));
    assert_eq!(countdown(5_000, 4_999), CountdownState::Upcoming(Countdown::default()));
}

#[test]
fn pad2_zero_pads_single_digits() {
    assert_eq!(pad2(7), "07");
    assert_eq!(pad2(42), "42");
    assert_eq!(pad2(123), "123");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn now_is_after_2024() {
    assert!(now_ms() > 1_704_067_200_000);
}
