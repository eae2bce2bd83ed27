use crate::error::{AppError, AppResult};
use crate::models::hotel::{Hotel, HotelSearch};
use actix_web::{web, HttpResponse};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub async fn get_hotels(
    pool: web::Data<SqlitePool>,
    params: web::Query<HotelSearch>,
) -> AppResult<HttpResponse> {
    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM hotels WHERE 1=1");

    if let Some(city) = &params.city {
        query.push(" AND city LIKE ").push_bind(format!("%{city}%"));
    }

    if let Some(min) = params.min_price {
        query.push(" AND price >= ").push_bind(min);
    }

    if let Some(max) = params.max_price {
        query.push(" AND price <= ").push_bind(max);
    }

    query.push(" ORDER BY created_at DESC, id DESC");

    let hotels = query
        .build_query_as::<Hotel>()
        .fetch_all(pool.get_ref())
        .await?;

    Ok(HttpResponse::Ok().json(hotels))
}

pub async fn get_hotel_by_id(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let hotel = sqlx::query_as::<_, Hotel>("SELECT * FROM hotels WHERE id = ?")
        .bind(path.into_inner())
        .fetch_optional(pool.get_ref())
        .await?
        .ok_or(AppError::NotFound("Hotel"))?;

    Ok(HttpResponse::Ok().json(hotel))
}
