//! Access scoping - may an actor act on a given warehouse?
//!
//! This is a predicate, never an error source: callers raise the
//! access-denied condition themselves when it returns false.

use crate::domain::foundation::{UserRole, WarehouseId};

/// Returns true when an actor with `role` and `actor_warehouse_ids` may act
/// on `target`.
///
/// - ADMIN: always.
/// - Any other role: when the assignment set is empty (unrestricted) or
///   contains the target.
pub fn warehouse_accessible(
    role: UserRole,
    actor_warehouse_ids: &[WarehouseId],
    target: &WarehouseId,
) -> bool {
    if role.is_admin() {
        return true;
    }
    actor_warehouse_ids.is_empty() || actor_warehouse_ids.contains(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_accesses_any_warehouse() {
        let target = WarehouseId::new();
        assert!(warehouse_accessible(UserRole::Admin, &[], &target));
        assert!(warehouse_accessible(
            UserRole::Admin,
            &[WarehouseId::new()],
            &target
        ));
    }

    #[test]
    fn empty_assignment_set_is_unrestricted() {
        let target = WarehouseId::new();
        assert!(warehouse_accessible(
            UserRole::WarehouseManager,
            &[],
            &target
        ));
        assert!(warehouse_accessible(UserRole::ProcessLeader, &[], &target));
    }

    #[test]
    fn assigned_warehouse_is_accessible() {
        let target = WarehouseId::new();
        let assigned = vec![WarehouseId::new(), target];
        assert!(warehouse_accessible(
            UserRole::WarehouseManager,
            &assigned,
            &target
        ));
    }

    #[test]
    fn unassigned_warehouse_is_denied() {
        let target = WarehouseId::new();
        let assigned = vec![WarehouseId::new()];
        assert!(!warehouse_accessible(
            UserRole::WarehouseManager,
            &assigned,
            &target
        ));
        assert!(!warehouse_accessible(
            UserRole::ProcessLeader,
            &assigned,
            &target
        ));
    }
}
