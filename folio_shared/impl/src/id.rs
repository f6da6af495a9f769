use folio_shared_contracts::id::IdService;
use uuid::Uuid;

/// Generates UUIDv7 ids, which embed the creation timestamp and sort in
/// insertion order.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        Uuid::now_v7().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate() {
        // Arrange
        let sut = IdServiceImpl;

        // Act
        let id1 = sut.generate::<Uuid>();
        let id2 = sut.generate::<Uuid>();

        // Assert
        assert_ne!(id1, id2);
    }
}
