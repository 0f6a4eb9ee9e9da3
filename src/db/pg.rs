use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Executor, Pool, Postgres};

use super::rows::{into_drivers, DriverRow, RideRow};
use super::{DriverCatalog, RideStore};
use crate::entities::{Driver, DriverId, NewRide, RideId, RideRecord};
use crate::error::{not_found_error, Error};

const DEFAULT_DRIVERS: [(&str, &str, &str, f64, f64, i32); 3] = [
    (
        "Homer Simpson",
        "Hi! I'm Homer, your friendly driver. Relax and enjoy the ride, donuts and laughs included (and maybe a detour or two).",
        "Plymouth Valiant 1973, pink and rusty",
        2.0,
        2.5,
        1,
    ),
    (
        "Dominic Toretto",
        "Hey, it's Dom. Get in, I'll get you there safe and fast. Just don't touch the radio, the playlist is sacred.",
        "Dodge Charger R/T 1970, modified",
        4.0,
        5.0,
        5,
    ),
    (
        "James Bond",
        "Good evening, I'm James Bond. At your service for a smooth and discreet ride. Fasten your seatbelt and enjoy the trip.",
        "Classic Aston Martin DB5",
        5.0,
        10.0,
        10,
    ),
];

/// PostgreSQL-backed driver catalog and ride store. Built once at start-up
/// and shared by reference.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: Pool<Postgres>,
}

impl PgStore {
    #[tracing::instrument(name = "PgStore::new", skip(db_uri))]
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self { pool })
    }

    #[tracing::instrument(skip(self))]
    pub async fn migrate(&self) -> Result<(), Error> {
        self.pool
            .execute(
                "CREATE TABLE IF NOT EXISTS drivers (
                    id SERIAL PRIMARY KEY,
                    name VARCHAR NOT NULL,
                    description TEXT NOT NULL,
                    vehicle VARCHAR NOT NULL,
                    rating DOUBLE PRECISION NOT NULL,
                    rate_per_km DOUBLE PRECISION NOT NULL,
                    min_km INT4 NOT NULL
                )",
            )
            .await?;

        self.pool
            .execute(
                "CREATE TABLE IF NOT EXISTS rides (
                    id SERIAL PRIMARY KEY,
                    customer_id VARCHAR NOT NULL,
                    origin TEXT NOT NULL,
                    destination TEXT NOT NULL,
                    distance DOUBLE PRECISION NOT NULL,
                    duration VARCHAR NOT NULL,
                    driver_id INT4 NOT NULL,
                    value DOUBLE PRECISION NOT NULL,
                    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                    CONSTRAINT fk_ride_driver FOREIGN KEY(driver_id) REFERENCES drivers(id)
                )",
            )
            .await?;

        self.pool
            .execute("CREATE INDEX IF NOT EXISTS rides_customer_idx ON rides (customer_id, created_at DESC)")
            .await?;

        Ok(())
    }

    /// Inserts the default drivers when the catalog is empty.
    #[tracing::instrument(skip(self))]
    pub async fn seed_drivers(&self) -> Result<(), Error> {
        let mut tx = self.pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM drivers")
            .fetch_one(&mut tx)
            .await?;

        if count > 0 {
            tracing::info!(count, "driver catalog already populated");
            return Ok(());
        }

        for (name, description, vehicle, rating, rate_per_km, min_km) in DEFAULT_DRIVERS {
            sqlx::query(
                "INSERT INTO drivers (name, description, vehicle, rating, rate_per_km, min_km) VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(name)
            .bind(description)
            .bind(vehicle)
            .bind(rating)
            .bind(rate_per_km)
            .bind(min_km)
            .execute(&mut tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(count = DEFAULT_DRIVERS.len(), "seeded driver catalog");

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DriverCatalog for PgStore {
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Driver>, Error> {
        let rows: Vec<DriverRow> = sqlx::query_as(
            "SELECT id, name, description, vehicle, rating, rate_per_km, min_km FROM drivers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(not_found_error("no drivers found"));
        }

        into_drivers(rows)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, Error> {
        let maybe_row: Option<DriverRow> = sqlx::query_as(
            "SELECT id, name, description, vehicle, rating, rate_per_km, min_km FROM drivers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        maybe_row.map(Driver::try_from).transpose()
    }

    #[tracing::instrument(skip(self))]
    async fn find_eligible(&self, distance_km: i32) -> Result<Vec<Driver>, Error> {
        let rows: Vec<DriverRow> = sqlx::query_as(
            "SELECT id, name, description, vehicle, rating, rate_per_km, min_km FROM drivers WHERE min_km <= $1 ORDER BY id",
        )
        .bind(distance_km)
        .fetch_all(&self.pool)
        .await?;

        if rows.is_empty() {
            return Err(not_found_error("no drivers available for this distance"));
        }

        into_drivers(rows)
    }
}

#[async_trait]
impl RideStore for PgStore {
    #[tracing::instrument(skip(self))]
    async fn insert_ride(&self, ride: NewRide) -> Result<RideId, Error> {
        let id: RideId = sqlx::query_scalar(
            "INSERT INTO rides (customer_id, origin, destination, distance, duration, driver_id, value) VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING id",
        )
        .bind(&ride.customer_id)
        .bind(&ride.origin)
        .bind(&ride.destination)
        .bind(ride.distance)
        .bind(&ride.duration)
        .bind(ride.driver_id)
        .bind(ride.value)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    #[tracing::instrument(skip(self))]
    async fn list_rides(
        &self,
        customer_id: &str,
        driver_id: Option<DriverId>,
    ) -> Result<Vec<RideRecord>, Error> {
        let query = "
            SELECT
                r.id, r.created_at AS date, r.origin, r.destination, r.distance,
                r.duration, r.value,
                d.id AS driver_id, d.name AS driver_name
            FROM
                rides r
                JOIN drivers d ON r.driver_id = d.id
            WHERE
                r.customer_id = $1
                AND ($2::INT4 IS NULL OR r.driver_id = $2)
            ORDER BY
                r.created_at DESC,
                r.id DESC
        ";

        let rows: Vec<RideRow> = sqlx::query_as(query)
            .bind(customer_id)
            .bind(driver_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(RideRecord::from).collect())
    }
}
