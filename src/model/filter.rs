use std::fmt;

/// Industry / cloudsuite category. Closed set; the label (with its
/// three-letter code) is the exact value Jira stores in the custom field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Fashion,
    FoodAndBeverage,
    Chemicals,
    DistributionEnterprise,
    Equipment,
}

impl Industry {
    pub const ALL: [Industry; 5] = [
        Industry::Fashion,
        Industry::FoodAndBeverage,
        Industry::Chemicals,
        Industry::DistributionEnterprise,
        Industry::Equipment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Fashion => "Fashion (FSH)",
            Industry::FoodAndBeverage => "Food & Beverage (FAB)",
            Industry::Chemicals => "Chemicals (CHE)",
            Industry::DistributionEnterprise => "Distribution Enterprise (DSE)",
            Industry::Equipment => "Equipment (EQP)",
        }
    }

    pub fn from_label(label: &str) -> Option<Industry> {
        Industry::ALL.into_iter().find(|i| i.label() == label)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Process component. Closed set; `ALL` is the canonical order used both for
/// the picker and for the wildcard IN clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    BuyToOrder,
    DistributionToInternalInvoice,
    InspectionToApproval,
    InventoryToManagedPackages,
    OrderToCash,
    ProcureToPay,
    FinancialPlanToReport,
    FreightCostsToCharges,
    PlanToInventory,
    ProductionToInventory,
    RentalAgreementToInvoice,
}

impl Component {
    pub const ALL: [Component; 11] = [
        Component::BuyToOrder,
        Component::DistributionToInternalInvoice,
        Component::InspectionToApproval,
        Component::InventoryToManagedPackages,
        Component::OrderToCash,
        Component::ProcureToPay,
        Component::FinancialPlanToReport,
        Component::FreightCostsToCharges,
        Component::PlanToInventory,
        Component::ProductionToInventory,
        Component::RentalAgreementToInvoice,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Component::BuyToOrder => "Buy to Order",
            Component::DistributionToInternalInvoice => "Distribution to Internal Invoice",
            Component::InspectionToApproval => "Inspection to Approval",
            Component::InventoryToManagedPackages => "Inventory to Managed Packages",
            Component::OrderToCash => "Order to Cash",
            Component::ProcureToPay => "Procure to Pay",
            Component::FinancialPlanToReport => "Financial Plan to Report",
            Component::FreightCostsToCharges => "Freight Costs to Charges",
            Component::PlanToInventory => "Plan to Inventory",
            Component::ProductionToInventory => "Production to Inventory",
            Component::RentalAgreementToInvoice => "Rental Agreement To Invoice",
        }
    }

    pub fn from_label(label: &str) -> Option<Component> {
        Component::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Component picker choice: the wildcard or a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentFilter {
    All,
    Only(Component),
}

impl ComponentFilter {
    /// Picker order: wildcard first, then the canonical component list.
    pub fn options() -> Vec<ComponentFilter> {
        let mut opts = vec![ComponentFilter::All];
        opts.extend(Component::ALL.into_iter().map(ComponentFilter::Only));
        opts
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComponentFilter::All => "All",
            ComponentFilter::Only(c) => c.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<ComponentFilter> {
        if label == "All" {
            return Some(ComponentFilter::All);
        }
        Component::from_label(label).map(ComponentFilter::Only)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, ComponentFilter::All)
    }
}

impl fmt::Display for ComponentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-facing status selection, mapping to one or more raw Jira statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGroup {
    ResolvedAndReopened,
    Resolved,
    Reopened,
}

impl StatusGroup {
    pub const ALL: [StatusGroup; 3] = [
        StatusGroup::ResolvedAndReopened,
        StatusGroup::Resolved,
        StatusGroup::Reopened,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusGroup::ResolvedAndReopened => "Resolved & Reopened",
            StatusGroup::Resolved => "Resolved",
            StatusGroup::Reopened => "Reopened",
        }
    }

    /// Raw status keywords, in the order they appear in an IN clause.
    pub fn statuses(&self) -> &'static [&'static str] {
        match self {
            StatusGroup::ResolvedAndReopened => &["Resolved", "Reopened"],
            StatusGroup::Resolved => &["Resolved"],
            StatusGroup::Reopened => &["Reopened"],
        }
    }

    pub fn from_label(label: &str) -> Option<StatusGroup> {
        StatusGroup::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for StatusGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One complete set of picker choices. Built fresh from UI state whenever the
/// query is rebuilt; never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub industry: Industry,
    pub component: ComponentFilter,
    pub status: StatusGroup,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            industry: Industry::Fashion,
            component: ComponentFilter::All,
            status: StatusGroup::ResolvedAndReopened,
        }
    }
}
