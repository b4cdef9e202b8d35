//! Form metadata for each entity.

use crate::form::entity_form::FormEntity;
use crate::model::application_user::ApplicationUser;
use crate::model::fiscal_month::FiscalMonth;
use crate::model::fiscal_quarter::FiscalQuarter;
use crate::model::fiscal_year::FiscalYear;
use crate::model::money_market_deal::MoneyMarketDeal;
use crate::model::placeholder::Placeholder;
use crate::model::report_batch::ReportBatch;
use crate::model::security_clearance::SecurityClearance;
use crate::model::upload_notification::UploadNotification;

impl FormEntity for FiscalYear {
    const DATE_TIME_FIELDS: &'static [&'static str] = &["lastUpdatedAt"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["fiscalYearCode", "startDate", "endDate"];
}

impl FormEntity for FiscalQuarter {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "quarterNumber",
        "startDate",
        "endDate",
        "fiscalQuarterCode",
        "fiscalYear",
    ];
}

impl FormEntity for FiscalMonth {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] = &[
        "monthNumber",
        "startDate",
        "endDate",
        "fiscalMonthCode",
        "fiscalYear",
    ];
}

impl FormEntity for Placeholder {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] = &["description"];
}

impl FormEntity for ApplicationUser {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["designation", "applicationIdentity", "securityClearance"];
}

impl FormEntity for MoneyMarketDeal {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] =
        &["dealNumber", "tradeDate", "currencyCode", "principalAmount"];
}

impl FormEntity for ReportBatch {
    const DATE_TIME_FIELDS: &'static [&'static str] = &["uploadTimeStamp"];
    const REQUIRED_FIELDS: &'static [&'static str] = &["reportDate", "uploadTimeStamp"];
}

impl FormEntity for UploadNotification {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] = &["errorMessage"];
}

impl FormEntity for SecurityClearance {
    const DATE_TIME_FIELDS: &'static [&'static str] = &[];
    const REQUIRED_FIELDS: &'static [&'static str] = &["clearanceLevel"];
}
