/// Identificador numérico asignado por la capa de persistencia.
pub type Id = i32;

/// Capacidad común a todo lo que el catálogo puede ordenar.
///
/// Dos entidades del mismo tipo se ordenan por `position` ascendente. El `id`
/// lo asigna la persistencia y no cambia una vez asignado.
pub trait Movable {
  fn id(&self) -> Option<Id>;
  fn set_id(&mut self, id: Option<Id>);
  fn position(&self) -> i32;
  fn set_position(&mut self, position: i32);
}

/// Entidades que poseen colecciones anidadas de otros `Movable`.
///
/// `visit_children_mut` recorre todos los descendientes, a cualquier
/// profundidad (una serie visita sus temporadas y los episodios de cada una).
pub trait Composite {
  fn visit_children_mut(&mut self, visit: &mut dyn FnMut(&mut dyn Movable)) {
    let _ = visit;
  }
}

/// Raíz de agregado: se lista, se obtiene y se persiste por sí misma.
pub trait Aggregate: Movable + Composite + Clone {
  /// Nombre estable del tipo, usado por el almacenamiento y en los logs.
  const KIND: &'static str;
}

macro_rules! impl_movable {
  ($($ty:ty),+ $(,)?) => {
    $(
      impl $crate::movable::Movable for $ty {
        fn id(&self) -> Option<$crate::movable::Id> {
          self.id
        }

        fn set_id(&mut self, id: Option<$crate::movable::Id>) {
          self.id = id;
        }

        fn position(&self) -> i32 {
          self.position
        }

        fn set_position(&mut self, position: i32) {
          self.position = position;
        }
      }
    )+
  };
}

pub(crate) use impl_movable;
