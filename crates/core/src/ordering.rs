// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::transition::TransitionRecord;

/// Sorts transitions into canonical replay order.
///
/// Records are grouped by subscription and ordered by their total ordering
/// within each subscription. The sort is stable.
pub fn sort_for_replay(records: &mut [TransitionRecord]) {
    records.sort_by_key(TransitionRecord::replay_key);
}

/// Stamps the remaining-event count on the events of one user operation.
///
/// `records` must be in emission order. The first record gets
/// `records.len() - 1`, the last gets 0. Inputs are left untouched; the
/// returned records are copies.
#[must_use]
pub fn annotate_user_operation(records: &[TransitionRecord]) -> Vec<TransitionRecord> {
    let total: usize = records.len();

    tracing::debug!(
        event_count = total,
        user_token = ?records.first().and_then(TransitionRecord::user_token),
        "Annotating user operation events"
    );

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let remaining: u32 = u32::try_from(total - index - 1).unwrap_or(u32::MAX);
            record.with_remaining_events_for_user_operation(remaining)
        })
        .collect()
}
