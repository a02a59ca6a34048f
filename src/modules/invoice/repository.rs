use super::schema::InvoiceStatus;
use crate::utils::pagination::{Paginated, Pagination};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

#[derive(Serialize, Clone, Debug, sqlx::FromRow)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateInvoicePayload {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInvoicePayload {
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateInvoicePayload,
) -> Result<Invoice, Error> {
    sqlx::query_as::<_, Invoice>(
        "
        INSERT INTO invoices
        (id, customer_id, amount, status, date)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.customer_id)
    .bind(payload.amount)
    .bind(payload.status.as_str())
    .bind(payload.date)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create an invoice: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Invoice>, Error> {
    sqlx::query_as::<_, Invoice>("SELECT * FROM invoices WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching invoice with id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}

#[derive(Deserialize, Clone, Default)]
pub struct Filters {
    pub customer_id: Option<String>,
}

// The total is counted independently of the requested page so it stays
// correct when the offset lands past the last row.
pub async fn find_many<'e, E: PgExecutor<'e> + Copy>(
    e: E,
    pagination: Pagination,
    filters: Filters,
) -> Result<Paginated<Invoice>, Error> {
    let total: i64 = sqlx::query_scalar(
        "
        SELECT COUNT(id)
        FROM invoices
        WHERE customer_id ILIKE CONCAT('%', COALESCE($1, customer_id), '%')
        ",
    )
    .bind(filters.customer_id.clone())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to count invoices: {}",
            err
        );
        Error::UnexpectedError
    })?;

    sqlx::query_as::<_, Invoice>(
        "
        SELECT *
        FROM invoices
        WHERE customer_id ILIKE CONCAT('%', COALESCE($3, customer_id), '%')
        ORDER BY date DESC, id DESC
        LIMIT $1
        OFFSET $2
        ",
    )
    .bind(pagination.per_page as i64)
    .bind(((pagination.page - 1) * pagination.per_page) as i64)
    .bind(filters.customer_id)
    .fetch_all(e)
    .await
    .map(|items| {
        Paginated::new(
            items,
            total as u32,
            pagination.page,
            pagination.per_page,
        )
    })
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch many invoices: {}",
            err
        );
        Error::UnexpectedError
    })
}

// Blind write: only the three caller-editable columns are touched, id
// and date never change.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateInvoicePayload,
) -> Result<(), Error> {
    sqlx::query(
        "
        UPDATE invoices SET
            customer_id = $1,
            amount = $2,
            status = $3
        WHERE
            id = $4
        ",
    )
    .bind(&payload.customer_id)
    .bind(payload.amount)
    .bind(payload.status.as_str())
    .bind(&id)
    .execute(e)
    .await
    .map(|_| ())
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update an invoice by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

// Deleting an id that does not exist affects zero rows and is still
// reported as success.
pub async fn delete_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<(), Error> {
    sqlx::query("DELETE FROM invoices WHERE id = $1")
        .bind(&id)
        .execute(e)
        .await
        .map(|_| ())
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to delete an invoice by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
}
