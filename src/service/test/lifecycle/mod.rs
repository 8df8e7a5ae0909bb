use crate::data::{election::ElectionRepository, seat::SeatRepository};
use crate::error::ElectionError;
use crate::model::election::CallElectionParams;
use crate::service::lifecycle::ElectionLifecycle;
use crate::testkit;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn call_params(seat_id: &str) -> CallElectionParams {
    CallElectionParams {
        seat_id: seat_id.to_string(),
        reason: "Resignation of the incumbent".to_string(),
        called_by: 999,
    }
}
