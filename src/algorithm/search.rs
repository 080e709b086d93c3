// Búsqueda branch-and-bound (DFS) de la mejor asignación de temas.
//
// Los eventos se recorren en un orden fijo: menos candidatos primero, luego
// event_id, luego posición original. En cada nivel se prueban los candidatos
// del evento en su orden de prioridad, respetando la regla de no repetir un
// tema entre eventos que comparten asistentes.
use std::cmp::Ordering;
use std::hash::Hash;

use tracing::debug;

use crate::algorithm::ledger::TopicLedger;
use crate::error::TopicError;
use crate::models::{EventTopicProfile, SearchStats, TopicAssignment};

/// Valor de una asignación completa. `topics` va en el orden original de los eventos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    pub total: u32,
    pub min: u32,
    pub topics: Vec<String>,
}

impl Objective {
    /// `Greater` significa que `self` es mejor que `other`:
    /// 1. mayor puntaje total
    /// 2. mayor puntaje mínimo por evento
    /// 3. tupla de temas lexicográficamente menor
    pub fn compare(&self, other: &Objective) -> Ordering {
        self.total
            .cmp(&other.total)
            .then(self.min.cmp(&other.min))
            .then_with(|| other.topics.cmp(&self.topics))
    }

    pub fn beats(&self, other: &Objective) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

/// Orden de búsqueda: posiciones originales ordenadas por
/// (cantidad de candidatos, event_id, posición).
pub fn search_order<A: Eq + Hash>(profiles: &[EventTopicProfile<A>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..profiles.len()).collect();
    order.sort_by_key(|&i| (profiles[i].candidates.len(), profiles[i].event_id, i));
    order
}

struct SearchContext<'a, A: Eq + Hash> {
    profiles: &'a [EventTopicProfile<A>],
    order: Vec<usize>,
    // remaining_max[p] = suma de max_score de order[p..]
    remaining_max: Vec<u32>,
    ledger: TopicLedger<A>,
    best: Option<Objective>,
    stats: SearchStats,
}

impl<'a, A: Eq + Hash + Clone> SearchContext<'a, A> {
    fn new(profiles: &'a [EventTopicProfile<A>]) -> Self {
        let order = search_order(profiles);
        let mut remaining_max = vec![0u32; order.len() + 1];
        for pos in (0..order.len()).rev() {
            remaining_max[pos] = remaining_max[pos + 1] + profiles[order[pos]].max_score();
        }
        SearchContext {
            profiles,
            order,
            remaining_max,
            ledger: TopicLedger::new(profiles.len()),
            best: None,
            stats: SearchStats::default(),
        }
    }

    fn dfs(&mut self, position: usize, current_total: u32, current_min: u32) {
        self.stats.nodes += 1;

        if position == self.order.len() {
            self.stats.leaves += 1;
            let Some(topics) = self.ledger.topic_tuple() else {
                return;
            };
            let candidate = Objective { total: current_total, min: current_min, topics };
            let better = match &self.best {
                None => true,
                Some(best) => candidate.beats(best),
            };
            if better {
                self.best = Some(candidate);
            }
            return;
        }

        // Con cota igual al mejor total se sigue bajando: los desempates
        // por mínimo y por orden lexicográfico pueden cambiar el ganador.
        if let Some(best) = &self.best {
            let upper_bound = current_total + self.remaining_max[position];
            if upper_bound < best.total {
                self.stats.pruned += 1;
                return;
            }
        }

        let profiles = self.profiles;
        let slot = self.order[position];
        let profile = &profiles[slot];

        for candidate in &profile.candidates {
            if !self.ledger.can_assign(&candidate.topic, &profile.attendee_ids) {
                continue;
            }
            let rollback = self.ledger.assign(slot, &candidate.topic, &profile.attendee_ids);
            let next_min = if position == 0 { candidate.score } else { current_min.min(candidate.score) };
            self.dfs(position + 1, current_total + candidate.score, next_min);
            self.ledger.unassign(slot, &candidate.topic, &profile.attendee_ids, rollback);
        }
    }
}

/// Recorre el espacio de asignaciones y devuelve la mejor (un tema por evento).
pub fn choose_best_assignment<A: Eq + Hash + Clone>(
    profiles: &[EventTopicProfile<A>],
) -> Result<(TopicAssignment, SearchStats), TopicError> {
    let mut ctx = SearchContext::new(profiles);
    ctx.dfs(0, 0, 0);

    debug!(
        events = profiles.len(),
        nodes = ctx.stats.nodes,
        pruned = ctx.stats.pruned,
        leaves = ctx.stats.leaves,
        "topic search finished"
    );

    // Sólo se llega a una hoja con todos los eventos asignados.
    let best = match ctx.best {
        Some(best) if best.topics.len() == profiles.len() => best,
        Some(best) => {
            return Err(TopicError::IncompleteAssignment { assigned: best.topics.len(), expected: profiles.len() });
        }
        None => return Err(TopicError::IncompleteAssignment { assigned: 0, expected: profiles.len() }),
    };

    let assignment = TopicAssignment {
        event_ids: profiles.iter().map(|p| p.event_id).collect(),
        topics: best.topics,
        total_score: best.total,
        min_score: best.min,
    };
    Ok((assignment, ctx.stats))
}
