#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{json, Value};

use rideshare::db::{DriverCatalog, RideStore};
use rideshare::engine::Engine;
use rideshare::entities::{Driver, DriverId, Fare, NewRide, RideDriver, RideId, RideRecord};
use rideshare::error::{not_found_error, server_error, Error};
use rideshare::external::google_maps::parse_directions;
use rideshare::external::{Directions, MappingProvider};

pub fn driver(id: DriverId, name: &str, rate_per_km: f64, min_km: i32) -> Driver {
    Driver {
        id,
        name: name.into(),
        description: format!("{} at your service", name),
        vehicle: "sedan".into(),
        rating: 4.0,
        rate_per_km,
        min_km,
    }
}

pub fn default_drivers() -> Vec<Driver> {
    vec![
        driver(1, "Homer Simpson", 2.5, 1),
        driver(2, "Dominic Toretto", 5.0, 5),
        driver(3, "James Bond", 10.0, 10),
    ]
}

pub struct MemoryCatalog {
    pub drivers: Vec<Driver>,
    pub fail: bool,
}

#[async_trait]
impl DriverCatalog for MemoryCatalog {
    async fn list_all(&self) -> Result<Vec<Driver>, Error> {
        if self.fail {
            return Err(server_error());
        }

        if self.drivers.is_empty() {
            return Err(not_found_error("no drivers found"));
        }

        Ok(self.drivers.clone())
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, Error> {
        if self.fail {
            return Err(server_error());
        }

        Ok(self.drivers.iter().find(|d| d.id == id).cloned())
    }

    async fn find_eligible(&self, distance_km: i32) -> Result<Vec<Driver>, Error> {
        if self.fail {
            return Err(server_error());
        }

        let eligible: Vec<Driver> = self
            .drivers
            .iter()
            .filter(|d| d.min_km <= distance_km)
            .cloned()
            .collect();

        if eligible.is_empty() {
            return Err(not_found_error("no drivers available for this distance"));
        }

        Ok(eligible)
    }
}

pub struct MemoryRides {
    pub drivers: Vec<Driver>,
    pub rides: Mutex<Vec<(RideId, NewRide)>>,
    pub fail: bool,
}

impl MemoryRides {
    pub fn stored(&self) -> Vec<NewRide> {
        self.rides
            .lock()
            .unwrap()
            .iter()
            .map(|(_, ride)| ride.clone())
            .collect()
    }
}

#[async_trait]
impl RideStore for MemoryRides {
    async fn insert_ride(&self, ride: NewRide) -> Result<RideId, Error> {
        if self.fail {
            return Err(server_error());
        }

        let mut rides = self.rides.lock().unwrap();
        let id = rides.len() as RideId + 1;
        rides.push((id, ride));

        Ok(id)
    }

    async fn list_rides(
        &self,
        customer_id: &str,
        driver_id: Option<DriverId>,
    ) -> Result<Vec<RideRecord>, Error> {
        if self.fail {
            return Err(server_error());
        }

        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let rides = self.rides.lock().unwrap();

        let mut records: Vec<RideRecord> = rides
            .iter()
            .filter(|(_, r)| r.customer_id == customer_id)
            .filter(|(_, r)| driver_id.map_or(true, |id| r.driver_id == id))
            .map(|(id, r)| {
                let name = self
                    .drivers
                    .iter()
                    .find(|d| d.id == r.driver_id)
                    .map(|d| d.name.clone())
                    .unwrap_or_default();

                RideRecord {
                    id: *id,
                    date: base + Duration::minutes(i64::from(*id)),
                    origin: r.origin.clone(),
                    destination: r.destination.clone(),
                    distance: r.distance,
                    duration: r.duration.clone(),
                    driver: RideDriver {
                        id: r.driver_id,
                        name,
                    },
                    value: Fare::new(r.value),
                }
            })
            .collect();

        records.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(records)
    }
}

pub struct StubMaps {
    pub payload: Option<Value>,
}

#[async_trait]
impl MappingProvider for StubMaps {
    async fn directions(&self, _origin: &str, _destination: &str) -> Result<Directions, Error> {
        match &self.payload {
            Some(payload) => parse_directions(payload.clone()),
            None => Err(server_error()),
        }
    }
}

pub fn leg(meters: f64, duration: &str) -> Value {
    json!({
        "distance": { "text": format!("{} m", meters), "value": meters },
        "duration": { "text": duration, "value": 600 },
        "start_location": { "lat": -23.5613, "lng": -46.6565 },
        "end_location": { "lat": -23.5874, "lng": -46.6576 },
        "steps": []
    })
}

pub fn route_payload(meters: f64, duration: &str) -> Value {
    json!({
        "status": "OK",
        "geocoded_waypoints": [],
        "routes": [{ "summary": "Av. Paulista", "legs": [leg(meters, duration)] }]
    })
}

pub struct Fixture {
    pub engine: Engine,
    pub rides: Arc<MemoryRides>,
}

pub fn fixture(drivers: Vec<Driver>, payload: Option<Value>) -> Fixture {
    let catalog = Arc::new(MemoryCatalog {
        drivers: drivers.clone(),
        fail: false,
    });
    let rides = Arc::new(MemoryRides {
        drivers,
        rides: Mutex::new(vec![]),
        fail: false,
    });
    let maps = Arc::new(StubMaps { payload });

    Fixture {
        engine: Engine::new(catalog, rides.clone(), maps),
        rides,
    }
}
