//! Badge and badge award repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::badge::{Badge, CreateBadgeParams, UserBadge};

pub struct BadgeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BadgeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBadgeParams) -> Result<Badge, DbErr> {
        let entity = entity::badge::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            icon: ActiveValue::Set(params.icon),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Badge::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Badge>, DbErr> {
        let entity = entity::prelude::Badge::find_by_id(id).one(self.db).await?;
        Ok(entity.map(Badge::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Badge>, DbErr> {
        let entity = entity::prelude::Badge::find()
            .filter(entity::badge::Column::Name.eq(name))
            .one(self.db)
            .await?;
        Ok(entity.map(Badge::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Badge>, DbErr> {
        let entities = entity::prelude::Badge::find()
            .order_by_asc(entity::badge::Column::Name)
            .all(self.db)
            .await?;
        Ok(entities.into_iter().map(Badge::from_entity).collect())
    }

    /// Deletes a badge together with every award of it.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::UserBadge::delete_many()
            .filter(entity::user_badge::Column::BadgeId.eq(id))
            .exec(self.db)
            .await?;
        let result = entity::prelude::Badge::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn award_exists(&self, user_id: i32, badge_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::UserBadge::find_by_id((user_id, badge_id))
            .one(self.db)
            .await?;
        Ok(entity.is_some())
    }

    pub async fn award(
        &self,
        user_id: i32,
        badge_id: i32,
        awarded_by: Option<i32>,
        awarded_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::UserBadge::insert(entity::user_badge::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            badge_id: ActiveValue::Set(badge_id),
            awarded_by: ActiveValue::Set(awarded_by),
            awarded_at: ActiveValue::Set(awarded_at),
        })
        .exec_without_returning(self.db)
        .await?;
        Ok(())
    }

    pub async fn revoke(&self, user_id: i32, badge_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserBadge::delete_by_id((user_id, badge_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Badges held by a user, most recently awarded first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<UserBadge>, DbErr> {
        let rows = entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_badge::Column::AwardedAt)
            .find_also_related(entity::prelude::Badge)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(award, badge)| {
                badge.map(|badge| UserBadge {
                    badge: Badge::from_entity(badge),
                    awarded_by: award.awarded_by,
                    awarded_at: award.awarded_at,
                })
            })
            .collect())
    }
}
