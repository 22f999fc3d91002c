//! Integration tests for the inventory counting lifecycle.
//!
//! These tests verify the end-to-end flow across handlers:
//! 1. A session is created for a warehouse and month (cap + auto-numbering)
//! 2. Counts are registered against it with unit conversion
//! 3. The session is closed exactly once
//! 4. Writes after closing and duplicate counts are rejected
//!
//! Uses in-memory implementations that enforce the same uniqueness rules
//! as the storage constraints, so conflict paths are exercised without a
//! database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use stocktake::application::handlers::inventory::{
    AddProductsCommand, AddProductsHandler, CloseSessionCommand, CloseSessionHandler,
    CreateSessionCommand, CreateSessionHandler, ListCountsHandler, ListCountsQuery,
    RegisterCountCommand, RegisterCountHandler,
};
use stocktake::domain::flag::FeatureFlag;
use stocktake::domain::foundation::{
    DomainError, ErrorCode, FlagId, Period, ProductId, SessionId, Timestamp, UnitId, UserId,
    UserRole, WarehouseId,
};
use stocktake::domain::inventory::{
    InventoryCount, InventorySession, RESTRICT_CREATION_WINDOW_FLAG,
};
use stocktake::domain::product::Product;
use stocktake::domain::unit::MeasurementUnit;
use stocktake::ports::{
    CountRepository, FeatureFlagRepository, ProductRepository, SessionFilter, SessionRepository,
    UnitRepository,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory session repository enforcing the (warehouse, period,
/// count_number) uniqueness constraint.
struct TestSessionRepository {
    sessions: Mutex<Vec<InventorySession>>,
}

impl TestSessionRepository {
    fn new() -> Self {
        Self {
            sessions: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SessionRepository for TestSessionRepository {
    async fn save(&self, session: &InventorySession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        if sessions.iter().any(|s| {
            s.warehouse_id() == session.warehouse_id()
                && s.period() == session.period()
                && s.count_number() == session.count_number()
        }) {
            return Err(DomainError::rule_violated(
                "An inventory session with this count number already exists for the period",
            ));
        }
        sessions.push(session.clone());
        Ok(())
    }

    async fn update(&self, session: &InventorySession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.iter_mut().find(|s| s.id() == session.id()) {
            Some(slot) => {
                *slot = session.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                "Inventory session not found",
            )),
        }
    }

    async fn get_by_id(&self, id: &SessionId) -> Result<Option<InventorySession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == id)
            .cloned())
    }

    async fn list_by_warehouse(
        &self,
        warehouse_id: &WarehouseId,
    ) -> Result<Vec<InventorySession>, DomainError> {
        Ok(self
            .sessions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.warehouse_id() == warehouse_id)
            .cloned()
            .collect())
    }

    async fn list_filtered(
        &self,
        _filter: &SessionFilter,
    ) -> Result<Vec<InventorySession>, DomainError> {
        Ok(self.sessions.lock().unwrap().clone())
    }
}

/// In-memory count repository enforcing the (session, product)
/// uniqueness constraint.
struct TestCountRepository {
    counts: Mutex<Vec<InventoryCount>>,
}

impl TestCountRepository {
    fn new() -> Self {
        Self {
            counts: Mutex::new(Vec::new()),
        }
    }

    fn stored(&self) -> Vec<InventoryCount> {
        self.counts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountRepository for TestCountRepository {
    async fn save(&self, count: &InventoryCount) -> Result<(), DomainError> {
        let mut counts = self.counts.lock().unwrap();
        if counts
            .iter()
            .any(|c| c.session_id() == count.session_id() && c.product_id() == count.product_id())
        {
            return Err(DomainError::rule_violated(
                "An inventory count already exists for this product in the session",
            ));
        }
        counts.push(count.clone());
        Ok(())
    }

    async fn list_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<InventoryCount>, DomainError> {
        let mut counts: Vec<InventoryCount> = self
            .counts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.session_id() == session_id)
            .cloned()
            .collect();
        counts.sort_by_key(|c| *c.created_at());
        Ok(counts)
    }

    async fn exists_by_session_and_product(
        &self,
        session_id: &SessionId,
        product_id: &ProductId,
    ) -> Result<bool, DomainError> {
        Ok(self
            .counts
            .lock()
            .unwrap()
            .iter()
            .any(|c| c.session_id() == session_id && c.product_id() == product_id))
    }

    async fn count_by_session(&self, session_id: &SessionId) -> Result<u64, DomainError> {
        Ok(self
            .counts
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.session_id() == session_id)
            .count() as u64)
    }
}

/// Fixed product catalog.
struct TestProductRepository {
    products: Vec<Product>,
}

#[async_trait]
impl ProductRepository for TestProductRepository {
    async fn get_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self.products.iter().find(|p| p.id() == id).cloned())
    }

    async fn list_active(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.products.clone())
    }
}

/// Keyed flag store.
struct TestFlagRepository {
    flags: Mutex<Vec<FeatureFlag>>,
}

impl TestFlagRepository {
    fn empty() -> Self {
        Self {
            flags: Mutex::new(Vec::new()),
        }
    }

    fn with_enabled(key: &str) -> Self {
        let flag = FeatureFlag::new(FlagId::new(), key, true, None, Timestamp::now()).unwrap();
        Self {
            flags: Mutex::new(vec![flag]),
        }
    }
}

#[async_trait]
impl FeatureFlagRepository for TestFlagRepository {
    async fn get_by_key(&self, key: &str) -> Result<Option<FeatureFlag>, DomainError> {
        Ok(self
            .flags
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.key() == key)
            .cloned())
    }

    async fn get_by_id(&self, id: &FlagId) -> Result<Option<FeatureFlag>, DomainError> {
        Ok(self
            .flags
            .lock()
            .unwrap()
            .iter()
            .find(|f| f.id() == id)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<FeatureFlag>, DomainError> {
        Ok(self.flags.lock().unwrap().clone())
    }

    async fn save(&self, flag: &FeatureFlag) -> Result<(), DomainError> {
        self.flags.lock().unwrap().push(flag.clone());
        Ok(())
    }

    async fn update(&self, flag: &FeatureFlag) -> Result<(), DomainError> {
        let mut flags = self.flags.lock().unwrap();
        match flags.iter_mut().find(|f| f.id() == flag.id()) {
            Some(slot) => {
                *slot = flag.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::FlagNotFound,
                "Feature flag not found",
            )),
        }
    }
}

/// Empty unit catalog; counts in these tests carry no entry unit.
struct NoUnitRepository;

#[async_trait]
impl UnitRepository for NoUnitRepository {
    async fn get_by_id(&self, _id: &UnitId) -> Result<Option<MeasurementUnit>, DomainError> {
        Ok(None)
    }

    async fn get_by_ids(&self, _ids: &[UnitId]) -> Result<Vec<MeasurementUnit>, DomainError> {
        Ok(vec![])
    }

    async fn get_by_name(&self, _name: &str) -> Result<Option<MeasurementUnit>, DomainError> {
        Ok(None)
    }

    async fn get_by_abbreviation(
        &self,
        _abbreviation: &str,
    ) -> Result<Option<MeasurementUnit>, DomainError> {
        Ok(None)
    }

    async fn list_active(&self) -> Result<Vec<MeasurementUnit>, DomainError> {
        Ok(vec![])
    }

    async fn save(&self, _unit: &MeasurementUnit) -> Result<(), DomainError> {
        Ok(())
    }

    async fn update(&self, _unit: &MeasurementUnit) -> Result<(), DomainError> {
        Ok(())
    }
}

fn product_with_factor(factor: f64) -> Product {
    let now = Timestamp::now();
    Product::reconstitute(
        ProductId::new(),
        "P-001".to_string(),
        "Bottled water 600ml".to_string(),
        UnitId::new(),
        UnitId::new(),
        factor,
        true,
        now,
        now,
    )
}

struct Fixture {
    create: CreateSessionHandler,
    close: CloseSessionHandler,
    add: AddProductsHandler,
    register: RegisterCountHandler,
    list_counts: ListCountsHandler,
    counts: Arc<TestCountRepository>,
    warehouse_id: WarehouseId,
    product_id: ProductId,
}

fn fixture(flags: TestFlagRepository, factor: f64) -> Fixture {
    let product = product_with_factor(factor);
    let product_id = *product.id();
    let sessions = Arc::new(TestSessionRepository::new());
    let counts = Arc::new(TestCountRepository::new());
    let products = Arc::new(TestProductRepository {
        products: vec![product],
    });
    let flags = Arc::new(flags);

    Fixture {
        create: CreateSessionHandler::new(sessions.clone(), flags),
        close: CloseSessionHandler::new(sessions.clone()),
        add: AddProductsHandler::new(sessions.clone(), counts.clone(), products.clone()),
        register: RegisterCountHandler::new(sessions.clone(), products.clone(), counts.clone()),
        list_counts: ListCountsHandler::new(sessions, counts.clone(), products, Arc::new(NoUnitRepository)),
        counts,
        warehouse_id: WarehouseId::new(),
        product_id,
    }
}

fn create_command(f: &Fixture, year: i32, month: u32, day: u32) -> CreateSessionCommand {
    CreateSessionCommand {
        warehouse_id: f.warehouse_id,
        period: Period::from_year_month(year, month).unwrap(),
        created_by: UserId::new(),
        creator_role: UserRole::WarehouseManager,
        creator_warehouse_ids: vec![f.warehouse_id],
        today: Timestamp::from_datetime(Utc.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap()),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_counting_cycle_end_to_end() {
    let f = fixture(TestFlagRepository::empty(), 12.0);

    // First session of February 2025
    let session = f.create.handle(create_command(&f, 2025, 2, 2)).await.unwrap();
    assert_eq!(session.count_number(), 1);
    assert!(!session.is_closed());

    // Register 5 packages of a factor-12 product
    let count = f
        .register
        .handle(RegisterCountCommand {
            session_id: *session.id(),
            product_id: f.product_id,
            packaging_quantity: 5,
            measure_unit_id: None,
            actor_warehouse_ids: vec![f.warehouse_id],
            actor_is_admin: false,
        })
        .await
        .unwrap();
    assert_eq!(count.quantity_units(), 60);

    // Close the session
    let closed = f
        .close
        .handle(CloseSessionCommand {
            session_id: *session.id(),
        })
        .await
        .unwrap();
    assert!(closed.is_closed());

    // Adding the product again is rejected: the session is closed
    let err = f
        .add
        .handle(AddProductsCommand {
            session_id: *session.id(),
            product_ids: vec![f.product_id],
        })
        .await
        .unwrap_err();
    assert!(err.is_rule_violation());

    // A second registration trips the (session, product) uniqueness guard
    let err = f
        .register
        .handle(RegisterCountCommand {
            session_id: *session.id(),
            product_id: f.product_id,
            packaging_quantity: 7,
            measure_unit_id: None,
            actor_warehouse_ids: vec![f.warehouse_id],
            actor_is_admin: false,
        })
        .await
        .unwrap_err();
    assert!(err.is_rule_violation());

    // The audit trail still holds exactly the original count
    let views = f
        .list_counts
        .handle(ListCountsQuery {
            session_id: *session.id(),
        })
        .await
        .unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].count.quantity_packages(), 5);
    assert_eq!(f.counts.stored().len(), 1);
}

#[tokio::test]
async fn cap_and_numbering_hold_across_the_month() {
    let f = fixture(TestFlagRepository::empty(), 10.0);

    let mut numbers = Vec::new();
    for _ in 0..3 {
        let session = f.create.handle(create_command(&f, 2025, 3, 2)).await.unwrap();
        numbers.push(session.count_number());
    }
    assert_eq!(numbers, vec![1, 2, 3]);

    let err = f
        .create
        .handle(create_command(&f, 2025, 3, 2))
        .await
        .unwrap_err();
    assert!(err.is_rule_violation());

    // The next month starts over at 1
    let session = f.create.handle(create_command(&f, 2025, 4, 1)).await.unwrap();
    assert_eq!(session.count_number(), 1);
}

#[tokio::test]
async fn creation_window_follows_the_flag() {
    // Flag enabled: day 5 is outside the window
    let gated = fixture(
        TestFlagRepository::with_enabled(RESTRICT_CREATION_WINDOW_FLAG),
        10.0,
    );
    let err = gated
        .create
        .handle(create_command(&gated, 2025, 3, 5))
        .await
        .unwrap_err();
    assert!(err.is_rule_violation());

    // Flag disabled: the same request succeeds
    let open = fixture(TestFlagRepository::empty(), 10.0);
    let session = open
        .create
        .handle(create_command(&open, 2025, 3, 5))
        .await
        .unwrap();
    assert_eq!(session.count_number(), 1);
}

#[tokio::test]
async fn membership_rows_are_idempotent_and_zero_quantity() {
    let f = fixture(TestFlagRepository::empty(), 10.0);
    let session = f.create.handle(create_command(&f, 2025, 2, 2)).await.unwrap();

    let cmd = AddProductsCommand {
        session_id: *session.id(),
        product_ids: vec![f.product_id],
    };
    let added = f.add.handle(cmd.clone()).await.unwrap();
    assert_eq!(added.len(), 1);
    assert_eq!(added[0].quantity_packages(), 0);
    assert_eq!(added[0].quantity_units(), 0);

    let second = f.add.handle(cmd).await.unwrap();
    assert!(second.is_empty());
    assert_eq!(f.counts.stored().len(), 1);
}
