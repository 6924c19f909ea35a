use crate::core::domain::Identifiable;

// Repository is the synchronous store contract; every call is a single atomic step.
pub trait Repository<Entity: Identifiable, Patch>: Sync + Send {
    // create an entity, re-keying it if its id is already taken
    fn create(&self, entity: Entity) -> Entity;

    // merges the patch into an existing entity, None if the id is unknown
    fn update(&self, id: &str, patch: &Patch) -> Option<Entity>;

    // get an entity
    fn get(&self, id: &str) -> Option<Entity>;

    // delete an entity, false if nothing was stored under the id
    fn delete(&self, id: &str) -> bool;

    // snapshot of all entities
    fn find_all(&self) -> Vec<Entity>;
}
