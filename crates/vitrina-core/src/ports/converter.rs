use crate::movable::Movable;

/// Traducción entre la forma externa (`Entity`) y la persistida (`Domain`).
pub trait Converter {
  type Entity: Movable;
  type Domain: Movable;

  fn to_entity(&self, domain: &Self::Domain) -> Self::Entity;
  fn to_domain(&self, entity: &Self::Entity) -> Self::Domain;

  /// Sobrescribe `domain` con los campos de `entity`.
  ///
  /// Los tipos con colecciones anidadas lo redefinen para conservarlas, ya que
  /// la forma externa no las transporta.
  fn apply(&self, entity: &Self::Entity, domain: &mut Self::Domain) {
    *domain = self.to_domain(entity);
  }

  fn to_entities(&self, domains: &[Self::Domain]) -> Vec<Self::Entity> {
    domains.iter().map(|domain| self.to_entity(domain)).collect()
  }

  fn to_domains(&self, entities: &[Self::Entity]) -> Vec<Self::Domain> {
    entities.iter().map(|entity| self.to_domain(entity)).collect()
  }
}
