//! Services wired once at startup and the section dispatch of the shell.

use std::{fmt, str::FromStr, sync::Arc};

use store_config::{Config, TokenStore};

use crate::{
    api::StoreApi,
    auth::AuthController,
    errors::{Result, StoreError},
    format::DisplayFormat,
    managers::{
        ChargesManager, ExpenseItemsManager, ResourceManager, SalesManager, WarehousesManager,
    },
    reports::ReportsManager,
    view::View,
};

/// Content regions the shell can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Warehouses,
    Sales,
    Charges,
    ExpenseItems,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Dashboard,
        Section::Warehouses,
        Section::Sales,
        Section::Charges,
        Section::ExpenseItems,
    ];

    pub fn command(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Warehouses => "warehouse",
            Section::Sales => "sale",
            Section::Charges => "charge",
            Section::ExpenseItems => "expense",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Section::Dashboard => "Overview of the store sections",
            Section::Warehouses => "Manage warehouse stock",
            Section::Sales => "Manage sales",
            Section::Charges => "Manage charges",
            Section::ExpenseItems => "Manage expense items",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

impl FromStr for Section {
    type Err = StoreError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.command().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| StoreError::InvalidInput(format!("unknown section `{value}`")))
    }
}

/// Every service the views need, constructed once and passed by reference.
pub struct App {
    pub api: Arc<StoreApi>,
    pub auth: AuthController,
    pub warehouses: WarehousesManager,
    pub sales: SalesManager,
    pub charges: ChargesManager,
    pub expense_items: ExpenseItemsManager,
    pub reports: ReportsManager,
    pub format: DisplayFormat,
}

impl App {
    pub fn new(config: &Config, store: Box<dyn TokenStore>) -> Self {
        let api = Arc::new(StoreApi::new(config.resolve_api_base_url()));
        Self::with_api(api, config, store)
    }

    pub fn with_api(api: Arc<StoreApi>, config: &Config, store: Box<dyn TokenStore>) -> Self {
        let format = DisplayFormat::from_config(config);
        Self {
            auth: AuthController::new(Arc::clone(&api), store),
            warehouses: WarehousesManager::new(Arc::clone(&api), format.clone()),
            sales: SalesManager::new(Arc::clone(&api), format.clone())
                .with_stock_check(config.check_stock_before_sale),
            charges: ChargesManager::new(Arc::clone(&api), format.clone()),
            expense_items: ExpenseItemsManager::new(Arc::clone(&api)),
            reports: ReportsManager::new(Arc::clone(&api), format.clone()),
            format,
            api,
        }
    }

    /// Rebuilds the formatting-dependent services for a changed config.
    /// The API client and the session are kept.
    pub fn apply_display(&mut self, config: &Config) {
        let format = DisplayFormat::from_config(config);
        self.warehouses = WarehousesManager::new(Arc::clone(&self.api), format.clone());
        self.sales = SalesManager::new(Arc::clone(&self.api), format.clone())
            .with_stock_check(config.check_stock_before_sale);
        self.charges = ChargesManager::new(Arc::clone(&self.api), format.clone());
        self.reports = ReportsManager::new(Arc::clone(&self.api), format.clone());
        self.format = format;
    }

    /// Loads a section after the login gate.
    pub async fn open(&self, section: Section) -> Result<View> {
        self.auth.require_session()?;
        let view = match section {
            Section::Dashboard => self.dashboard()?,
            Section::Warehouses => self.warehouses.load().await?.into(),
            Section::Sales => self.sales.load().await?.into(),
            Section::Charges => self.charges.load().await?.into(),
            Section::ExpenseItems => self.expense_items.load().await?.into(),
        };
        Ok(view)
    }

    pub fn dashboard(&self) -> Result<View> {
        let session = self.auth.require_session()?;
        let mut entries: Vec<(String, String)> = Section::ALL
            .into_iter()
            .filter(|section| *section != Section::Dashboard)
            .map(|section| {
                (
                    section.command().to_string(),
                    section.description().to_string(),
                )
            })
            .collect();
        entries.push(("report".into(), "Profit and top products reports".into()));
        Ok(View::Menu {
            title: format!("Welcome, {}!", session.user),
            entries,
        })
    }
}
