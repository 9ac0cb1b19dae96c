use crate::actor_framework::Entity;
use crate::domain::User;

impl Entity for User {
    type Key = String;

    /// Users are keyed by name; the registry map's key set is the name index.
    fn key(&self) -> &String {
        &self.name
    }
}
