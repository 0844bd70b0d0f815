//! Hotel designation catalogue.
//!
//! This module defines the closed set of hotel-industry job titles that staff
//! records, designation auto-fill and salary statements refer to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// A hotel-industry job designation.
///
/// Designations serialize as their display name (e.g. `"Front Desk Agent"`).
///
/// # Example
///
/// ```
/// use salary_engine::models::HotelDesignation;
///
/// let designation: HotelDesignation = "F&B Manager".parse().unwrap();
/// assert_eq!(designation, HotelDesignation::FnbManager);
/// assert_eq!(designation.to_string(), "F&B Manager");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HotelDesignation {
    // Management & Administration
    /// General Manager.
    GeneralManager,
    /// Assistant General Manager.
    AssistantGeneralManager,
    /// Hotel Manager.
    HotelManager,
    /// Assistant Manager.
    AssistantManager,
    /// Front Office Manager.
    FrontOfficeManager,
    /// Duty Manager.
    DutyManager,
    /// Night Manager.
    NightManager,
    // Front Office
    /// Front Desk Supervisor.
    FrontDeskSupervisor,
    /// Front Desk Agent.
    FrontDeskAgent,
    /// Front Desk Staff.
    FrontDeskStaff,
    /// Receptionist.
    Receptionist,
    /// Guest Relations Officer.
    GuestRelationsOfficer,
    /// Concierge.
    Concierge,
    /// Bell Captain.
    BellCaptain,
    /// Bellboy.
    Bellboy,
    /// Door Attendant.
    DoorAttendant,
    /// Valet Parking Attendant.
    ValetParkingAttendant,
    // Housekeeping
    /// Housekeeping Manager.
    HousekeepingManager,
    /// Assistant Housekeeping Manager.
    AssistantHousekeepingManager,
    /// Housekeeping Supervisor.
    HousekeepingSupervisor,
    /// Room Attendant.
    RoomAttendant,
    /// Housekeeping Attendant.
    HousekeepingAttendant,
    /// Linen Room Attendant.
    LinenRoomAttendant,
    /// Public Area Attendant.
    PublicAreaAttendant,
    /// Laundry Manager.
    LaundryManager,
    /// Laundry Supervisor.
    LaundrySupervisor,
    /// Laundry Attendant.
    LaundryAttendant,
    // Food & Beverage
    /// F&B Manager.
    FnbManager,
    /// Restaurant Manager.
    RestaurantManager,
    /// Assistant Restaurant Manager.
    AssistantRestaurantManager,
    /// Banquet Manager.
    BanquetManager,
    /// Bar Manager.
    BarManager,
    /// Captain.
    Captain,
    /// Waiter.
    Waiter,
    /// Waitress.
    Waitress,
    /// Steward.
    Steward,
    /// Bartender.
    Bartender,
    /// Barista.
    Barista,
    /// Sommelier.
    Sommelier,
    /// Room Service Supervisor.
    RoomServiceSupervisor,
    /// Room Service Attendant.
    RoomServiceAttendant,
    // Kitchen
    /// Executive Chef.
    ExecutiveChef,
    /// Sous Chef.
    SousChef,
    /// Chef de Partie.
    ChefDePartie,
    /// Demi Chef.
    DemiChef,
    /// Commis I.
    Commis1,
    /// Commis II.
    Commis2,
    /// Commis III.
    Commis3,
    /// Kitchen Steward.
    KitchenSteward,
    /// Kitchen Helper.
    KitchenHelper,
    /// Kitchen Staff.
    KitchenStaff,
    /// Pastry Chef.
    PastryChef,
    /// Bakery Chef.
    BakeryChef,
    // Accounts & Finance
    /// Finance Manager.
    FinanceManager,
    /// Accountant.
    Accountant,
    /// Assistant Accountant.
    AssistantAccountant,
    /// Accounts Executive.
    AccountsExecutive,
    /// Accounts Staff.
    AccountsStaff,
    /// Cashier.
    Cashier,
    /// Night Auditor.
    NightAuditor,
    // Sales & Marketing
    /// Sales Manager.
    SalesManager,
    /// Sales Executive.
    SalesExecutive,
    /// Marketing Manager.
    MarketingManager,
    /// Marketing Executive.
    MarketingExecutive,
    /// Reservation Manager.
    ReservationManager,
    /// Reservation Executive.
    ReservationExecutive,
    // Human Resources
    /// HR Manager.
    HrManager,
    /// HR Executive.
    HrExecutive,
    /// Training Manager.
    TrainingManager,
    /// Training Executive.
    TrainingExecutive,
    // Engineering & Maintenance
    /// Chief Engineer.
    ChiefEngineer,
    /// Maintenance Manager.
    MaintenanceManager,
    /// Maintenance Supervisor.
    MaintenanceSupervisor,
    /// Electrician.
    Electrician,
    /// Plumber.
    Plumber,
    /// Carpenter.
    Carpenter,
    /// AC Technician.
    AcTechnician,
    /// Maintenance Technician.
    MaintenanceTechnician,
    // Security
    /// Security Manager.
    SecurityManager,
    /// Security Supervisor.
    SecuritySupervisor,
    /// Security Guard.
    SecurityGuard,
    // Other
    /// Spa Manager.
    SpaManager,
    /// Spa Therapist.
    SpaTherapist,
    /// Fitness Instructor.
    FitnessInstructor,
    /// Swimming Pool Attendant.
    SwimmingPoolAttendant,
    /// Driver.
    Driver,
    /// Gardener.
    Gardener,
}

impl HotelDesignation {
    /// Every designation, in catalogue order.
    pub const ALL: [HotelDesignation; 87] = [
        HotelDesignation::GeneralManager,
        HotelDesignation::AssistantGeneralManager,
        HotelDesignation::HotelManager,
        HotelDesignation::AssistantManager,
        HotelDesignation::FrontOfficeManager,
        HotelDesignation::DutyManager,
        HotelDesignation::NightManager,
        HotelDesignation::FrontDeskSupervisor,
        HotelDesignation::FrontDeskAgent,
        HotelDesignation::FrontDeskStaff,
        HotelDesignation::Receptionist,
        HotelDesignation::GuestRelationsOfficer,
        HotelDesignation::Concierge,
        HotelDesignation::BellCaptain,
        HotelDesignation::Bellboy,
        HotelDesignation::DoorAttendant,
        HotelDesignation::ValetParkingAttendant,
        HotelDesignation::HousekeepingManager,
        HotelDesignation::AssistantHousekeepingManager,
        HotelDesignation::HousekeepingSupervisor,
        HotelDesignation::RoomAttendant,
        HotelDesignation::HousekeepingAttendant,
        HotelDesignation::LinenRoomAttendant,
        HotelDesignation::PublicAreaAttendant,
        HotelDesignation::LaundryManager,
        HotelDesignation::LaundrySupervisor,
        HotelDesignation::LaundryAttendant,
        HotelDesignation::FnbManager,
        HotelDesignation::RestaurantManager,
        HotelDesignation::AssistantRestaurantManager,
        HotelDesignation::BanquetManager,
        HotelDesignation::BarManager,
        HotelDesignation::Captain,
        HotelDesignation::Waiter,
        HotelDesignation::Waitress,
        HotelDesignation::Steward,
        HotelDesignation::Bartender,
        HotelDesignation::Barista,
        HotelDesignation::Sommelier,
        HotelDesignation::RoomServiceSupervisor,
        HotelDesignation::RoomServiceAttendant,
        HotelDesignation::ExecutiveChef,
        HotelDesignation::SousChef,
        HotelDesignation::ChefDePartie,
        HotelDesignation::DemiChef,
        HotelDesignation::Commis1,
        HotelDesignation::Commis2,
        HotelDesignation::Commis3,
        HotelDesignation::KitchenSteward,
        HotelDesignation::KitchenHelper,
        HotelDesignation::KitchenStaff,
        HotelDesignation::PastryChef,
        HotelDesignation::BakeryChef,
        HotelDesignation::FinanceManager,
        HotelDesignation::Accountant,
        HotelDesignation::AssistantAccountant,
        HotelDesignation::AccountsExecutive,
        HotelDesignation::AccountsStaff,
        HotelDesignation::Cashier,
        HotelDesignation::NightAuditor,
        HotelDesignation::SalesManager,
        HotelDesignation::SalesExecutive,
        HotelDesignation::MarketingManager,
        HotelDesignation::MarketingExecutive,
        HotelDesignation::ReservationManager,
        HotelDesignation::ReservationExecutive,
        HotelDesignation::HrManager,
        HotelDesignation::HrExecutive,
        HotelDesignation::TrainingManager,
        HotelDesignation::TrainingExecutive,
        HotelDesignation::ChiefEngineer,
        HotelDesignation::MaintenanceManager,
        HotelDesignation::MaintenanceSupervisor,
        HotelDesignation::Electrician,
        HotelDesignation::Plumber,
        HotelDesignation::Carpenter,
        HotelDesignation::AcTechnician,
        HotelDesignation::MaintenanceTechnician,
        HotelDesignation::SecurityManager,
        HotelDesignation::SecuritySupervisor,
        HotelDesignation::SecurityGuard,
        HotelDesignation::SpaManager,
        HotelDesignation::SpaTherapist,
        HotelDesignation::FitnessInstructor,
        HotelDesignation::SwimmingPoolAttendant,
        HotelDesignation::Driver,
        HotelDesignation::Gardener,
    ];

    /// Returns the display name of the designation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelDesignation::GeneralManager => "General Manager",
            HotelDesignation::AssistantGeneralManager => "Assistant General Manager",
            HotelDesignation::HotelManager => "Hotel Manager",
            HotelDesignation::AssistantManager => "Assistant Manager",
            HotelDesignation::FrontOfficeManager => "Front Office Manager",
            HotelDesignation::DutyManager => "Duty Manager",
            HotelDesignation::NightManager => "Night Manager",
            HotelDesignation::FrontDeskSupervisor => "Front Desk Supervisor",
            HotelDesignation::FrontDeskAgent => "Front Desk Agent",
            HotelDesignation::FrontDeskStaff => "Front Desk Staff",
            HotelDesignation::Receptionist => "Receptionist",
            HotelDesignation::GuestRelationsOfficer => "Guest Relations Officer",
            HotelDesignation::Concierge => "Concierge",
            HotelDesignation::BellCaptain => "Bell Captain",
            HotelDesignation::Bellboy => "Bellboy",
            HotelDesignation::DoorAttendant => "Door Attendant",
            HotelDesignation::ValetParkingAttendant => "Valet Parking Attendant",
            HotelDesignation::HousekeepingManager => "Housekeeping Manager",
            HotelDesignation::AssistantHousekeepingManager => "Assistant Housekeeping Manager",
            HotelDesignation::HousekeepingSupervisor => "Housekeeping Supervisor",
            HotelDesignation::RoomAttendant => "Room Attendant",
            HotelDesignation::HousekeepingAttendant => "Housekeeping Attendant",
            HotelDesignation::LinenRoomAttendant => "Linen Room Attendant",
            HotelDesignation::PublicAreaAttendant => "Public Area Attendant",
            HotelDesignation::LaundryManager => "Laundry Manager",
            HotelDesignation::LaundrySupervisor => "Laundry Supervisor",
            HotelDesignation::LaundryAttendant => "Laundry Attendant",
            HotelDesignation::FnbManager => "F&B Manager",
            HotelDesignation::RestaurantManager => "Restaurant Manager",
            HotelDesignation::AssistantRestaurantManager => "Assistant Restaurant Manager",
            HotelDesignation::BanquetManager => "Banquet Manager",
            HotelDesignation::BarManager => "Bar Manager",
            HotelDesignation::Captain => "Captain",
            HotelDesignation::Waiter => "Waiter",
            HotelDesignation::Waitress => "Waitress",
            HotelDesignation::Steward => "Steward",
            HotelDesignation::Bartender => "Bartender",
            HotelDesignation::Barista => "Barista",
            HotelDesignation::Sommelier => "Sommelier",
            HotelDesignation::RoomServiceSupervisor => "Room Service Supervisor",
            HotelDesignation::RoomServiceAttendant => "Room Service Attendant",
            HotelDesignation::ExecutiveChef => "Executive Chef",
            HotelDesignation::SousChef => "Sous Chef",
            HotelDesignation::ChefDePartie => "Chef de Partie",
            HotelDesignation::DemiChef => "Demi Chef",
            HotelDesignation::Commis1 => "Commis I",
            HotelDesignation::Commis2 => "Commis II",
            HotelDesignation::Commis3 => "Commis III",
            HotelDesignation::KitchenSteward => "Kitchen Steward",
            HotelDesignation::KitchenHelper => "Kitchen Helper",
            HotelDesignation::KitchenStaff => "Kitchen Staff",
            HotelDesignation::PastryChef => "Pastry Chef",
            HotelDesignation::BakeryChef => "Bakery Chef",
            HotelDesignation::FinanceManager => "Finance Manager",
            HotelDesignation::Accountant => "Accountant",
            HotelDesignation::AssistantAccountant => "Assistant Accountant",
            HotelDesignation::AccountsExecutive => "Accounts Executive",
            HotelDesignation::AccountsStaff => "Accounts Staff",
            HotelDesignation::Cashier => "Cashier",
            HotelDesignation::NightAuditor => "Night Auditor",
            HotelDesignation::SalesManager => "Sales Manager",
            HotelDesignation::SalesExecutive => "Sales Executive",
            HotelDesignation::MarketingManager => "Marketing Manager",
            HotelDesignation::MarketingExecutive => "Marketing Executive",
            HotelDesignation::ReservationManager => "Reservation Manager",
            HotelDesignation::ReservationExecutive => "Reservation Executive",
            HotelDesignation::HrManager => "HR Manager",
            HotelDesignation::HrExecutive => "HR Executive",
            HotelDesignation::TrainingManager => "Training Manager",
            HotelDesignation::TrainingExecutive => "Training Executive",
            HotelDesignation::ChiefEngineer => "Chief Engineer",
            HotelDesignation::MaintenanceManager => "Maintenance Manager",
            HotelDesignation::MaintenanceSupervisor => "Maintenance Supervisor",
            HotelDesignation::Electrician => "Electrician",
            HotelDesignation::Plumber => "Plumber",
            HotelDesignation::Carpenter => "Carpenter",
            HotelDesignation::AcTechnician => "AC Technician",
            HotelDesignation::MaintenanceTechnician => "Maintenance Technician",
            HotelDesignation::SecurityManager => "Security Manager",
            HotelDesignation::SecuritySupervisor => "Security Supervisor",
            HotelDesignation::SecurityGuard => "Security Guard",
            HotelDesignation::SpaManager => "Spa Manager",
            HotelDesignation::SpaTherapist => "Spa Therapist",
            HotelDesignation::FitnessInstructor => "Fitness Instructor",
            HotelDesignation::SwimmingPoolAttendant => "Swimming Pool Attendant",
            HotelDesignation::Driver => "Driver",
            HotelDesignation::Gardener => "Gardener",
        }
    }
}

impl fmt::Display for HotelDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HotelDesignation {
    type Err = EngineError;

    /// Matches a display name, ignoring surrounding whitespace and ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnknownDesignation {
                name: wanted.to_string(),
            })
    }
}

impl TryFrom<String> for HotelDesignation {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HotelDesignation> for String {
    fn from(value: HotelDesignation) -> Self {
        value.as_str().to_string()
    }
}
