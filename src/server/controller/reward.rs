use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        reward::{CreateRewardDto, PurchaseDto, PurchaseFilter, RewardDto, UpdateRewardDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            access::{permits, Feature},
            parse_input,
            reward::{CreateRewardParams, PurchaseStatus, UpdateRewardParams},
        },
        service::reward::RewardService,
        state::AppState,
    },
};

/// Tag for grouping reward and purchase endpoints in OpenAPI documentation
pub static REWARD_TAG: &str = "reward";

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RewardFilter {
    /// Include archived rewards; honoured for holders of `manage_rewards` only
    #[serde(default)]
    pub include_inactive: bool,
}

/// Get the reward catalogue ordered by cost.
#[utoipa::path(
    get,
    path = "/api/rewards",
    tag = REWARD_TAG,
    params(RewardFilter),
    responses(
        (status = 200, description = "Rewards", body = Vec<RewardDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rewards(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<RewardFilter>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let include_inactive = filter.include_inactive && permits(user.role, Feature::ManageRewards);
    let rewards = RewardService::new(&state.db)
        .get_all(include_inactive)
        .await?;
    let rewards_dto: Vec<_> = rewards.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rewards_dto)))
}

/// Add a reward to the catalogue.
///
/// # Access Control
/// - `ManageRewards`
///
/// # Returns
/// - `201 Created` - The new reward
/// - `400 Bad Request` - Blank name, non-positive cost or negative stock
#[utoipa::path(
    post,
    path = "/api/rewards",
    tag = REWARD_TAG,
    request_body = CreateRewardDto,
    responses(
        (status = 201, description = "Reward created", body = RewardDto),
        (status = 400, description = "Invalid reward data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_reward(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRewardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageRewards)])
        .await?;

    let params = CreateRewardParams::from_dto(payload)?;
    let reward = RewardService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(reward.into_dto())))
}

/// Update a reward. `unlimited_stock` switches the reward to unlimited stock.
#[utoipa::path(
    put,
    path = "/api/rewards/{reward_id}",
    tag = REWARD_TAG,
    params(
        ("reward_id" = i32, Path, description = "Reward ID")
    ),
    request_body = UpdateRewardDto,
    responses(
        (status = 200, description = "Reward updated", body = RewardDto),
        (status = 400, description = "Invalid reward data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reward(
    State(state): State<AppState>,
    session: Session,
    Path(reward_id): Path<i32>,
    Json(payload): Json<UpdateRewardDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageRewards)])
        .await?;

    let params = UpdateRewardParams::from_dto(payload)?;
    let reward = RewardService::new(&state.db)
        .update(reward_id, params)
        .await?;

    Ok((StatusCode::OK, Json(reward.into_dto())))
}

/// Archive a reward. Past purchases keep referring to it.
#[utoipa::path(
    delete,
    path = "/api/rewards/{reward_id}",
    tag = REWARD_TAG,
    params(
        ("reward_id" = i32, Path, description = "Reward ID")
    ),
    responses(
        (status = 200, description = "Reward archived", body = RewardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_reward(
    State(state): State<AppState>,
    session: Session,
    Path(reward_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManageRewards)])
        .await?;

    let reward = RewardService::new(&state.db).archive(reward_id).await?;

    Ok((StatusCode::OK, Json(reward.into_dto())))
}

/// Spend points on a reward.
///
/// Points are deducted, limited stock is taken and a pending purchase is
/// recorded in one transaction.
///
/// # Returns
/// - `201 Created` - The pending purchase
/// - `400 Bad Request` - Reward archived, out of stock, or insufficient points
/// - `404 Not Found` - Reward not found
#[utoipa::path(
    post,
    path = "/api/rewards/{reward_id}/redeem",
    tag = REWARD_TAG,
    params(
        ("reward_id" = i32, Path, description = "Reward ID")
    ),
    responses(
        (status = 201, description = "Reward redeemed", body = PurchaseDto),
        (status = 400, description = "Not redeemable", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Reward not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn redeem_reward(
    State(state): State<AppState>,
    session: Session,
    Path(reward_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::RedeemRewards)])
        .await?;

    let purchase = RewardService::new(&state.db)
        .redeem(user.id, reward_id)
        .await?;

    Ok((StatusCode::CREATED, Json(purchase.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/purchases/mine",
    tag = REWARD_TAG,
    responses(
        (status = 200, description = "Own purchases", body = Vec<PurchaseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_purchases(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let purchases = RewardService::new(&state.db)
        .get_purchases_for_user(user.id)
        .await?;
    let purchases_dto: Vec<_> = purchases.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(purchases_dto)))
}

/// Get all purchases, optionally filtered by status.
#[utoipa::path(
    get,
    path = "/api/purchases",
    tag = REWARD_TAG,
    params(PurchaseFilter),
    responses(
        (status = 200, description = "Purchases", body = Vec<PurchaseDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_purchases(
    State(state): State<AppState>,
    session: Session,
    Query(filter): Query<PurchaseFilter>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManagePurchases)])
        .await?;

    let status = filter
        .status
        .as_deref()
        .map(parse_input::<PurchaseStatus>)
        .transpose()?;
    let purchases = RewardService::new(&state.db)
        .get_all_purchases(status)
        .await?;
    let purchases_dto: Vec<_> = purchases.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(purchases_dto)))
}

/// Mark a pending purchase fulfilled. The buyer is notified.
#[utoipa::path(
    post,
    path = "/api/purchases/{purchase_id}/fulfil",
    tag = REWARD_TAG,
    params(
        ("purchase_id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Purchase fulfilled", body = PurchaseDto),
        (status = 400, description = "Purchase is not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn fulfil_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Feature(Feature::ManagePurchases)])
        .await?;

    let purchase = RewardService::new(&state.db)
        .fulfil(purchase_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}

/// Cancel a pending purchase, refunding its cost and returning limited stock.
///
/// # Access Control
/// - The buyer, or `ManagePurchases`
#[utoipa::path(
    post,
    path = "/api/purchases/{purchase_id}/cancel",
    tag = REWARD_TAG,
    params(
        ("purchase_id" = i32, Path, description = "Purchase ID")
    ),
    responses(
        (status = 200, description = "Purchase cancelled", body = PurchaseDto),
        (status = 400, description = "Purchase is not pending", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the buyer and missing permission", body = ErrorDto),
        (status = 404, description = "Purchase not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_purchase(
    State(state): State<AppState>,
    session: Session,
    Path(purchase_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let purchase = RewardService::new(&state.db)
        .cancel(&user, purchase_id, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(purchase.into_dto())))
}
