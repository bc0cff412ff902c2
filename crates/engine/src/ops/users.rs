use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{EngineError, ResultEngine, User, require_text, users};

use super::super::Engine;

impl Engine {
    /// Looks up the user a client claims to be. There is no credential
    /// check: knowing a `net_id` is enough.
    pub async fn login(&self, net_id: Option<String>) -> ResultEngine<User> {
        let net_id = require_text(net_id, "netId")?;
        users::Entity::find_by_id(net_id.clone())
            .one(&self.database)
            .await?
            .map(User::from)
            .ok_or(EngineError::NoUser(net_id))
    }

    /// Full records of every raffle-eligible user.
    pub async fn raffle_users(&self) -> ResultEngine<Vec<User>> {
        let net_ids = self.raffle_eligible().await?;
        if net_ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(users::Entity::find()
            .filter(users::Column::NetId.is_in(net_ids))
            .order_by_asc(users::Column::NetId)
            .all(&self.database)
            .await?
            .into_iter()
            .map(User::from)
            .collect())
    }
}
