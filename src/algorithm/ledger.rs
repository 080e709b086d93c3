// Libro de uso de temas: quién ya tiene cada tema en la asignación parcial.
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Registro devuelto por `assign` para deshacer exactamente la asignación.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rollback {
    existed: bool,
}

/// Estado mutable de la búsqueda: tema -> unión de asistentes, y tema elegido
/// por cada posición de evento.
#[derive(Debug)]
pub struct TopicLedger<A: Eq + Hash> {
    usage: HashMap<String, HashSet<A>>,
    assigned: Vec<Option<String>>,
}

impl<A: Eq + Hash + Clone> TopicLedger<A> {
    pub fn new(event_count: usize) -> Self {
        TopicLedger { usage: HashMap::new(), assigned: vec![None; event_count] }
    }

    /// Un tema sólo se reutiliza si no comparte asistentes con quienes ya lo tienen.
    pub fn can_assign(&self, topic: &str, attendees: &HashSet<A>) -> bool {
        match self.usage.get(topic) {
            None => true,
            Some(used_by) => used_by.is_disjoint(attendees),
        }
    }

    /// Asigna `topic` al evento `slot`. Debe llamarse sólo si `can_assign` es true,
    /// así la unión agrega exactamente los asistentes del evento.
    pub fn assign(&mut self, slot: usize, topic: &str, attendees: &HashSet<A>) -> Rollback {
        self.assigned[slot] = Some(topic.to_string());
        match self.usage.get_mut(topic) {
            Some(used_by) => {
                used_by.extend(attendees.iter().cloned());
                Rollback { existed: true }
            }
            None => {
                self.usage.insert(topic.to_string(), attendees.clone());
                Rollback { existed: false }
            }
        }
    }

    pub fn unassign(&mut self, slot: usize, topic: &str, attendees: &HashSet<A>, rollback: Rollback) {
        if rollback.existed {
            if let Some(used_by) = self.usage.get_mut(topic) {
                for a in attendees {
                    used_by.remove(a);
                }
            }
        } else {
            self.usage.remove(topic);
        }
        self.assigned[slot] = None;
    }

    pub fn topic_at(&self, slot: usize) -> Option<&str> {
        self.assigned[slot].as_deref()
    }

    pub fn assigned_count(&self) -> usize {
        self.assigned.iter().filter(|t| t.is_some()).count()
    }

    /// Temas en orden de slot; `None` mientras falte algún evento.
    pub fn topic_tuple(&self) -> Option<Vec<String>> {
        self.assigned.iter().cloned().collect()
    }

    pub fn usage_of(&self, topic: &str) -> Option<&HashSet<A>> {
        self.usage.get(topic)
    }
}
