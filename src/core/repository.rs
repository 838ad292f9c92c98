use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;

pub trait Repository<Entity: Identifiable>: Sync + Send {
    // create an entity keyed by its id, failing when the id is already taken
    fn create(&self, entity: Entity) -> LibraryResult<usize>;

    // get an entity
    fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    fn delete(&self, id: &str) -> LibraryResult<usize>;

    // number of stored entities
    fn count(&self) -> usize;
}
