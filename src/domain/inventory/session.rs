//! InventorySession entity and lifecycle rules.
//!
//! One physical-stock-count exercise for a warehouse in a given month.
//! Sessions are numbered 1..=3 within their (warehouse, period); numbering
//! is monotonic and never reused, so closing a session does not free a
//! slot within the same period.
//!
//! # Invariants
//!
//! - At most [`MAX_SESSIONS_PER_PERIOD`] sessions per (warehouse, period)
//! - `count_number` values within a period are unique, assigned by
//!   auto-increment at creation
//! - A closed session (`closed_at` set) is terminal

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, Period, SessionId, Timestamp, UserId, WarehouseId};

/// Cap on sessions per warehouse and period.
pub const MAX_SESSIONS_PER_PERIOD: usize = 3;

/// Calendar days of the month on which sessions may be created when the
/// date-restriction flag is enabled.
pub const ALLOWED_CREATION_DAYS: [u32; 3] = [1, 2, 3];

/// Feature flag key gating the creation-window rule.
pub const RESTRICT_CREATION_WINDOW_FLAG: &str = "ENABLE_INVENTORY_DATE_RESTRICTION";

/// An inventory count session: OPEN until closed, CLOSED is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySession {
    id: SessionId,
    warehouse_id: WarehouseId,
    period: Period,
    count_number: i32,
    created_by: UserId,
    created_at: Timestamp,
    closed_at: Option<Timestamp>,
}

impl InventorySession {
    /// Create a new open session.
    pub fn new(
        id: SessionId,
        warehouse_id: WarehouseId,
        period: Period,
        count_number: i32,
        created_by: UserId,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            warehouse_id,
            period,
            count_number,
            created_by,
            created_at: now,
            closed_at: None,
        }
    }

    /// Reconstitute a session from persistence.
    pub fn reconstitute(
        id: SessionId,
        warehouse_id: WarehouseId,
        period: Period,
        count_number: i32,
        created_by: UserId,
        created_at: Timestamp,
        closed_at: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            warehouse_id,
            period,
            count_number,
            created_by,
            created_at,
            closed_at,
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn warehouse_id(&self) -> &WarehouseId {
        &self.warehouse_id
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn count_number(&self) -> i32 {
        self.count_number
    }

    pub fn created_by(&self) -> &UserId {
        &self.created_by
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn closed_at(&self) -> Option<&Timestamp> {
        self.closed_at.as_ref()
    }

    /// Returns true once the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed_at.is_some()
    }

    /// Fails with a rule violation when the session is closed.
    ///
    /// Session-scoped write operations call this before touching counts.
    pub fn ensure_open(&self) -> Result<(), DomainError> {
        if self.is_closed() {
            return Err(DomainError::rule_violated(
                "Inventory session is already closed",
            ));
        }
        Ok(())
    }

    /// Returns a closed snapshot.
    ///
    /// Closing is not idempotent: closing twice is an operator error, not
    /// a no-op.
    ///
    /// # Errors
    ///
    /// - `RuleViolated` if the session is already closed
    pub fn closed(&self, now: Timestamp) -> Result<Self, DomainError> {
        self.ensure_open()?;
        Ok(Self {
            id: self.id,
            warehouse_id: self.warehouse_id,
            period: self.period,
            count_number: self.count_number,
            created_by: self.created_by,
            created_at: self.created_at,
            closed_at: Some(now),
        })
    }
}

/// Returns true when `today` falls inside the allowed creation window.
pub fn creation_window_allows(today: &Timestamp) -> bool {
    ALLOWED_CREATION_DAYS.contains(&today.day_of_month())
}

/// Next count number for a period, given the sessions already in it.
///
/// Counts existing sessions regardless of open/closed status: the cap is
/// count-based, so closing never frees a slot.
///
/// # Errors
///
/// - `RuleViolated` when the period already holds
///   [`MAX_SESSIONS_PER_PERIOD`] sessions
pub fn next_count_number(existing_in_period: &[&InventorySession]) -> Result<i32, DomainError> {
    if existing_in_period.len() >= MAX_SESSIONS_PER_PERIOD {
        return Err(DomainError::rule_violated(format!(
            "Maximum {} sessions per month per warehouse",
            MAX_SESSIONS_PER_PERIOD
        )));
    }
    let max = existing_in_period
        .iter()
        .map(|s| s.count_number())
        .max()
        .unwrap_or(0);
    Ok(max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn session(count_number: i32) -> InventorySession {
        InventorySession::new(
            SessionId::new(),
            WarehouseId::new(),
            Period::from_year_month(2025, 2).unwrap(),
            count_number,
            UserId::new(),
            Timestamp::now(),
        )
    }

    fn day(d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2025, 2, d, 12, 0, 0).unwrap())
    }

    #[test]
    fn first_session_gets_number_one() {
        assert_eq!(next_count_number(&[]).unwrap(), 1);
    }

    #[test]
    fn numbers_increment_from_existing_max() {
        let first = session(1);
        assert_eq!(next_count_number(&[&first]).unwrap(), 2);

        let second = session(2);
        assert_eq!(next_count_number(&[&first, &second]).unwrap(), 3);
    }

    #[test]
    fn fourth_session_violates_the_cap() {
        let existing = [session(1), session(2), session(3)];
        let refs: Vec<&InventorySession> = existing.iter().collect();
        let err = next_count_number(&refs).unwrap_err();
        assert!(err.is_rule_violation());
    }

    #[test]
    fn closed_sessions_still_count_toward_the_cap() {
        let closed: Vec<InventorySession> = (1..=3)
            .map(|n| session(n).closed(Timestamp::now()).unwrap())
            .collect();
        let refs: Vec<&InventorySession> = closed.iter().collect();
        assert!(next_count_number(&refs).is_err());
    }

    #[test]
    fn window_allows_only_first_three_days() {
        assert!(creation_window_allows(&day(1)));
        assert!(creation_window_allows(&day(2)));
        assert!(creation_window_allows(&day(3)));
        assert!(!creation_window_allows(&day(4)));
        assert!(!creation_window_allows(&day(28)));
    }

    #[test]
    fn new_session_is_open() {
        let session = session(1);
        assert!(!session.is_closed());
        assert!(session.ensure_open().is_ok());
    }

    #[test]
    fn closing_sets_closed_at_once() {
        let open = session(1);
        let closed = open.closed(Timestamp::now()).unwrap();
        assert!(closed.is_closed());

        let err = closed.closed(Timestamp::now()).unwrap_err();
        assert!(err.is_rule_violation());
    }

    #[test]
    fn closed_session_rejects_writes() {
        let closed = session(1).closed(Timestamp::now()).unwrap();
        assert!(closed.ensure_open().is_err());
    }
}
