//! The plant: node arena, setpoints and the per-step driver.
//!
//! A step runs, in order: repair countdowns, blockage resolution, steam and
//! water propagation, branch fixpoint, mass transfer between the vessels,
//! physics updates, and the failure check.

use pl_components::{
    Condenser, Flow, Medium, Mover, PowerTap, PressureVessel, Reactor, Repairable, Spinner,
    Throttle,
};
use pl_core::NodeId;
use pl_graph::{GraphError, NodeRole, RoleIndex, Topology, TopologyBuilder};
use tracing::{debug, error, info};

use crate::blockage::{self, BlockageMap};
use crate::config::{FlowParams, PlantConfig};
use crate::error::{SimError, SimResult};
use crate::events::FatalFailure;
use crate::propagate;
use crate::repair::RepairQueue;

/// Per-node state held in the arena, tagged by node kind.
///
/// The two vessels are owned by the plant directly; their arena entries are
/// markers.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantNode {
    Core,
    Sink,
    Branch,
    Throttle(Throttle),
    Mover(Mover),
    Spinner(Spinner),
}

impl PlantNode {
    pub fn role(&self) -> NodeRole {
        match self {
            PlantNode::Core => NodeRole::Core,
            PlantNode::Sink => NodeRole::Sink,
            PlantNode::Branch => NodeRole::Branch,
            PlantNode::Throttle(_) => NodeRole::Throttle,
            PlantNode::Mover(_) => NodeRole::Mover,
            PlantNode::Spinner(_) => NodeRole::Spinner,
        }
    }

    /// Nodes that cannot fail always report operational.
    pub fn is_operational(&self) -> bool {
        match self {
            PlantNode::Mover(m) => m.is_operational(),
            PlantNode::Spinner(s) => s.is_operational(),
            _ => true,
        }
    }

    fn repairable_mut(&mut self) -> Option<&mut dyn Repairable> {
        match self {
            PlantNode::Mover(m) => Some(m as &mut dyn Repairable),
            PlantNode::Spinner(s) => Some(s as &mut dyn Repairable),
            _ => None,
        }
    }
}

/// Builder for arbitrary plant layouts.
///
/// Exactly one core and one sink are required, plus a mover that cools the
/// sink. Spinners registered with `generator` feed the power output.
#[derive(Debug)]
pub struct PlantBuilder {
    config: PlantConfig,
    topology: TopologyBuilder,
    coolant: Option<NodeId>,
    generators: Vec<NodeId>,
}

impl PlantBuilder {
    pub fn new(config: PlantConfig) -> Self {
        Self {
            config,
            topology: TopologyBuilder::new(),
            coolant: None,
            generators: Vec::new(),
        }
    }

    pub fn core(&mut self, name: impl Into<String>) -> NodeId {
        self.topology.add_node(name, NodeRole::Core)
    }

    pub fn sink(&mut self, name: impl Into<String>) -> NodeId {
        self.topology.add_node(name, NodeRole::Sink)
    }

    pub fn branch(&mut self, name: impl Into<String>) -> NodeId {
        self.topology.add_node(name, NodeRole::Branch)
    }

    pub fn throttle(&mut self, name: impl Into<String>) -> NodeId {
        self.topology.add_node(name, NodeRole::Throttle)
    }

    pub fn mover(&mut self, name: impl Into<String>) -> NodeId {
        self.topology.add_node(name, NodeRole::Mover)
    }

    pub fn spinner(&mut self, name: impl Into<String>) -> NodeId {
        self.topology.add_node(name, NodeRole::Spinner)
    }

    /// Link `from` (upstream) to `to` (downstream).
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> &mut Self {
        self.topology.connect(from, to);
        self
    }

    /// The mover whose rpm drives the sink's cooldown.
    pub fn coolant(&mut self, mover: NodeId) -> &mut Self {
        self.coolant = Some(mover);
        self
    }

    /// Attach a power tap to a spinner.
    pub fn generator(&mut self, spinner: NodeId) -> &mut Self {
        self.generators.push(spinner);
        self
    }

    /// Validate the layout and construct every component.
    pub fn build(self) -> SimResult<Plant> {
        let config = self.config;
        let topology = self.topology.build()?;
        let roles = RoleIndex::from_topology(&topology);

        let coolant = self.coolant.ok_or(SimError::InvalidArg {
            what: "plant needs a coolant mover for the sink",
        })?;
        topology.expect_role(coolant, NodeRole::Mover)?;

        let tap = PowerTap::new(config.power_tap);
        let generators = self
            .generators
            .iter()
            .map(|&s| -> SimResult<(NodeId, PowerTap)> {
                topology.expect_role(s, NodeRole::Spinner)?;
                Ok((s, tap))
            })
            .collect::<SimResult<Vec<_>>>()?;

        let nodes = topology
            .nodes()
            .iter()
            .map(|n| -> SimResult<PlantNode> {
                Ok(match n.role {
                    NodeRole::Core => PlantNode::Core,
                    NodeRole::Sink => PlantNode::Sink,
                    NodeRole::Branch => PlantNode::Branch,
                    NodeRole::Throttle => PlantNode::Throttle(Throttle::new(config.throttle)),
                    NodeRole::Mover => PlantNode::Mover(Mover::new(config.mover)?),
                    NodeRole::Spinner => PlantNode::Spinner(Spinner::new(config.spinner)?),
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Plant {
            flows: label_media(&topology),
            blockage: BlockageMap::new(&topology),
            reactor: Reactor::new(config.reactor)?,
            condenser: Condenser::new(config.condenser)?,
            topology,
            roles,
            nodes,
            coolant,
            generators,
            flow_params: config.flow,
            repair_steps: config.repair_steps,
            repairs: RepairQueue::new(),
            steps: 0,
            score: 0,
            failure: None,
        })
    }
}

/// One flow per node: steam from the core up to the sink, water elsewhere.
fn label_media(topology: &Topology) -> Vec<Flow> {
    let mut flows = vec![Flow::new(Medium::Water); topology.len()];
    let (core, sink) = (topology.core(), topology.sink());
    flows[core.slot()].set_medium(Medium::Steam);

    let mut visited = vec![false; topology.len()];
    let mut stack = vec![core];
    while let Some(node) = stack.pop() {
        let next: Vec<NodeId> = if topology.role(node) == Some(NodeRole::Branch) {
            topology.branch_outputs(node).to_vec()
        } else {
            topology.downstream(node).into_iter().collect()
        };
        for n in next {
            if n == core || n == sink || visited[n.slot()] {
                continue;
            }
            visited[n.slot()] = true;
            flows[n.slot()].set_medium(Medium::Steam);
            stack.push(n);
        }
    }
    flows
}

/// A single plant instance and everything it owns.
#[derive(Debug, Clone)]
pub struct Plant {
    pub(crate) topology: Topology,
    pub(crate) roles: RoleIndex,
    pub(crate) nodes: Vec<PlantNode>,
    pub(crate) flows: Vec<Flow>,
    pub(crate) blockage: BlockageMap,
    pub(crate) reactor: Reactor,
    pub(crate) condenser: Condenser,
    pub(crate) coolant: NodeId,
    pub(crate) generators: Vec<(NodeId, PowerTap)>,
    pub(crate) flow_params: FlowParams,
    pub(crate) repair_steps: u32,
    pub(crate) repairs: RepairQueue,
    pub(crate) steps: u64,
    pub(crate) score: i64,
    pub(crate) failure: Option<FatalFailure>,
}

impl Plant {
    /// The reference plant:
    ///
    /// ```text
    /// reactor -> branch1 -> { valve1 -> turbine, valve2 } -> branch2 -> condenser
    /// condenser -> branch3 -> { pump1, pump2 } -> branch4 -> reactor
    /// coolant_pump cools the condenser; the turbine drives the generator
    /// ```
    pub fn standard(config: &PlantConfig) -> SimResult<Self> {
        let mut b = PlantBuilder::new(config.clone());
        let reactor = b.core("reactor");
        let condenser = b.sink("condenser");
        let branch1 = b.branch("branch1");
        let branch2 = b.branch("branch2");
        let branch3 = b.branch("branch3");
        let branch4 = b.branch("branch4");
        let valve1 = b.throttle("valve1");
        let valve2 = b.throttle("valve2");
        let turbine = b.spinner("turbine");
        let pump1 = b.mover("pump1");
        let pump2 = b.mover("pump2");
        let coolant = b.mover("coolant_pump");

        b.connect(reactor, branch1)
            .connect(branch1, valve1)
            .connect(branch1, valve2)
            .connect(valve1, turbine)
            .connect(turbine, branch2)
            .connect(valve2, branch2)
            .connect(branch2, condenser)
            .connect(condenser, branch3)
            .connect(branch3, pump1)
            .connect(branch3, pump2)
            .connect(pump1, branch4)
            .connect(pump2, branch4)
            .connect(branch4, reactor)
            .coolant(coolant)
            .generator(turbine);
        b.build()
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn roles(&self) -> &RoleIndex {
        &self.roles
    }

    /// Resolve a node name.
    pub fn find(&self, name: &str) -> SimResult<NodeId> {
        Ok(self.topology.find(name)?)
    }

    pub fn node(&self, id: NodeId) -> Option<&PlantNode> {
        self.nodes.get(id.slot())
    }

    /// Outgoing flow of a node as of the last step.
    pub fn flow(&self, id: NodeId) -> Option<&Flow> {
        self.flows.get(id.slot())
    }

    pub fn blockage(&self) -> &BlockageMap {
        &self.blockage
    }

    pub fn reactor(&self) -> &Reactor {
        &self.reactor
    }

    /// Direct access for state restore and test setup.
    pub fn reactor_mut(&mut self) -> &mut Reactor {
        &mut self.reactor
    }

    pub fn condenser(&self) -> &Condenser {
        &self.condenser
    }

    pub fn condenser_mut(&mut self) -> &mut Condenser {
        &mut self.condenser
    }

    /// The mover cooling the sink.
    pub fn coolant(&self) -> NodeId {
        self.coolant
    }

    fn wrong_role(&self, id: NodeId, expected: NodeRole) -> SimError {
        match self.topology.role(id) {
            Some(actual) => GraphError::WrongRole {
                node: id,
                expected,
                actual,
            }
            .into(),
            None => GraphError::InvalidNodeRef { node: id }.into(),
        }
    }

    pub fn throttle(&self, id: NodeId) -> SimResult<&Throttle> {
        match self.nodes.get(id.slot()) {
            Some(PlantNode::Throttle(t)) => Ok(t),
            _ => Err(self.wrong_role(id, NodeRole::Throttle)),
        }
    }

    pub fn mover(&self, id: NodeId) -> SimResult<&Mover> {
        match self.nodes.get(id.slot()) {
            Some(PlantNode::Mover(m)) => Ok(m),
            _ => Err(self.wrong_role(id, NodeRole::Mover)),
        }
    }

    pub fn spinner(&self, id: NodeId) -> SimResult<&Spinner> {
        match self.nodes.get(id.slot()) {
            Some(PlantNode::Spinner(s)) => Ok(s),
            _ => Err(self.wrong_role(id, NodeRole::Spinner)),
        }
    }

    fn throttle_mut(&mut self, id: NodeId) -> SimResult<&mut Throttle> {
        let err = self.wrong_role(id, NodeRole::Throttle);
        match self.nodes.get_mut(id.slot()) {
            Some(PlantNode::Throttle(t)) => Ok(t),
            _ => Err(err),
        }
    }

    fn mover_mut(&mut self, id: NodeId) -> SimResult<&mut Mover> {
        let err = self.wrong_role(id, NodeRole::Mover);
        match self.nodes.get_mut(id.slot()) {
            Some(PlantNode::Mover(m)) => Ok(m),
            _ => Err(err),
        }
    }

    fn repairable_mut(&mut self, id: NodeId) -> SimResult<&mut dyn Repairable> {
        let err = match self.topology.role(id) {
            Some(role) => SimError::NotRepairable { node: id, role },
            None => GraphError::InvalidNodeRef { node: id }.into(),
        };
        self.nodes
            .get_mut(id.slot())
            .and_then(PlantNode::repairable_mut)
            .ok_or(err)
    }

    // ------------------------------------------------------------------
    // Setpoints
    // ------------------------------------------------------------------

    pub fn set_control_rods(&mut self, percent_lowered: i64) -> SimResult<()> {
        self.reactor.set_control_rods(percent_lowered)?;
        info!(percent_lowered, "control rods set");
        Ok(())
    }

    pub fn set_pump_rpm(&mut self, id: NodeId, rpm: i64) -> SimResult<()> {
        self.mover_mut(id)?.set_rpm(rpm)?;
        info!(node = %id, rpm, "pump rpm set");
        Ok(())
    }

    pub fn set_pump_on(&mut self, id: NodeId, on: bool) -> SimResult<()> {
        self.mover_mut(id)?.set_on(on);
        info!(node = %id, on, "pump switched");
        Ok(())
    }

    pub fn set_valve(&mut self, id: NodeId, open: bool) -> SimResult<()> {
        self.throttle_mut(id)?.set_open(open);
        info!(node = %id, open, "valve set");
        Ok(())
    }

    pub fn quench_available(&self) -> bool {
        self.reactor.quench_available()
    }

    /// Emergency quench of the core. Only the first call has an effect.
    pub fn quench(&mut self) -> bool {
        let fired = self.reactor.quench();
        if fired {
            info!(
                steam = self.reactor.steam_volume(),
                temperature = self.reactor.temperature(),
                "reactor quenched"
            );
        }
        fired
    }

    // ------------------------------------------------------------------
    // Failure and repair
    // ------------------------------------------------------------------

    /// Break a mover or spinner. Any repair in progress is abandoned.
    pub fn fail(&mut self, id: NodeId) -> SimResult<()> {
        self.repairable_mut(id)?.set_operational(false);
        self.repairs.cancel(id);
        info!(node = %id, "component failed");
        Ok(())
    }

    /// Start repairing a failed mover or spinner.
    ///
    /// Returns `false` if the node is working or already under repair.
    pub fn request_repair(&mut self, id: NodeId) -> SimResult<bool> {
        if self.repairable_mut(id)?.is_operational() || self.repairs.contains(id) {
            return Ok(false);
        }
        self.repairs.start(id, self.repair_steps);
        info!(node = %id, steps = self.repair_steps, "repair started");
        Ok(true)
    }

    /// Steps left on a running repair.
    pub fn repair_remaining(&self, id: NodeId) -> Option<u32> {
        self.repairs.remaining(id)
    }

    /// Nodes that are currently not operational, in node order.
    pub fn failed_components(&self) -> Vec<NodeId> {
        self.topology
            .nodes()
            .iter()
            .filter(|n| !self.nodes[n.id.slot()].is_operational())
            .map(|n| n.id)
            .collect()
    }

    fn tick_repairs(&mut self) {
        for id in self.repairs.tick() {
            if let Some(node) = self.nodes.get_mut(id.slot()).and_then(PlantNode::repairable_mut) {
                node.set_operational(true);
                info!(node = %id, "repair finished");
            }
        }
    }

    // ------------------------------------------------------------------
    // Outputs
    // ------------------------------------------------------------------

    /// Generator output from every spinner with a power tap.
    pub fn power_output(&self) -> i64 {
        self.generators
            .iter()
            .filter_map(|&(s, tap)| match self.nodes.get(s.slot()) {
                Some(PlantNode::Spinner(spinner)) => Some(tap.power(spinner.rpm())),
                _ => None,
            })
            .sum()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Completed steps.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    pub fn failure(&self) -> Option<FatalFailure> {
        self.failure
    }

    pub fn is_game_over(&self) -> bool {
        self.failure.is_some()
    }

    // ------------------------------------------------------------------
    // Stepping
    // ------------------------------------------------------------------

    /// Run one full step.
    ///
    /// Returns `PlantFailure` on the step a vessel's health reaches zero and
    /// `GameOver` on every call after that.
    pub fn step(&mut self) -> SimResult<()> {
        if self.failure.is_some() {
            return Err(SimError::GameOver);
        }
        self.steps += 1;

        self.tick_repairs();
        self.update_flow()?;
        self.update_physics();
        self.score += self.power_output() * 10;

        if let Some(failure) = self.check_failure() {
            error!(%failure, "plant failure");
            self.failure = Some(failure);
            return Err(SimError::PlantFailure(failure));
        }
        Ok(())
    }

    /// Run up to `n` steps, stopping at the first error.
    pub fn advance(&mut self, n: u64) -> SimResult<u64> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(n)
    }

    fn closed_throttles(&self) -> Vec<NodeId> {
        self.roles
            .throttles()
            .iter()
            .copied()
            .filter(|&t| matches!(&self.nodes[t.slot()], PlantNode::Throttle(v) if !v.is_open()))
            .collect()
    }

    /// Blockage, propagation and transfer for this step.
    pub(crate) fn update_flow(&mut self) -> SimResult<()> {
        let closed = self.closed_throttles();
        blockage::resolve(&self.topology, &self.roles, closed, &mut self.blockage)?;

        for flow in &mut self.flows {
            flow.reset();
        }
        self.seed_steam();
        self.seed_water();
        let passes = propagate::resolve_branches(
            &self.topology,
            &self.roles,
            &self.blockage,
            &mut self.flows,
        );

        let core = self.topology.core();
        let sink = self.topology.sink();
        debug!(
            step = self.steps,
            core_out = self.flows[core.slot()].rate(),
            sink_out = self.flows[sink.slot()].rate(),
            blocked = self.blockage.blocked_count(),
            passes,
            "flow updated"
        );

        self.transfer()
    }

    fn seed_steam(&mut self) {
        let core = self.topology.core();
        let sink = self.topology.sink();
        if !propagate::path_exists(&self.topology, &self.blockage, core, sink) {
            return;
        }

        let candidate = propagate::steam_candidate(
            self.reactor.steam_volume(),
            self.condenser.steam_volume(),
            self.flow_params.max_core_steam_rate,
        );
        let throttles = self.roles.throttles().iter().filter_map(|&t| {
            match &self.nodes[t.slot()] {
                PlantNode::Throttle(v) => Some((t, v.max_throughput)),
                _ => None,
            }
        });
        let capacity = propagate::throttle_capacity(&self.topology, &self.blockage, core, throttles);

        self.flows[core.slot()].set(candidate.min(capacity), self.reactor.temperature());
        propagate::propagate_chain(&self.topology, &mut self.flows, core);
    }

    fn seed_water(&mut self) {
        let sink = self.topology.sink();
        let max_rate = self.flow_params.max_mover_rate;
        let pumped: i64 = self
            .roles
            .movers()
            .iter()
            .filter(|&&m| self.topology.upstream(m).is_some())
            .filter_map(|&m| match &self.nodes[m.slot()] {
                PlantNode::Mover(p) => Some(p.contributed_rate(max_rate)),
                _ => None,
            })
            .sum();

        let rate = pumped.min(self.condenser.water_volume());
        self.flows[sink.slot()].set(rate, self.condenser.temperature());
        propagate::propagate_chain(&self.topology, &mut self.flows, sink);
    }

    /// Move steam from core to sink and water from sink to core.
    fn transfer(&mut self) -> SimResult<()> {
        let core = self.topology.core();
        let sink = self.topology.sink();

        let steam = self.flows[core.slot()].rate();
        let steam_temperature = self.flows[core.slot()].temperature();
        self.reactor.remove_steam(steam)?;
        self.condenser.add_steam(steam, steam_temperature)?;

        let moved = self
            .condenser
            .water_volume()
            .min(self.flows[sink.slot()].rate());
        let inflow_temperature = self
            .topology
            .upstream(core)
            .map_or(0, |u| self.flows[u.slot()].temperature());
        self.condenser.pump_out_water(moved)?;
        self.reactor.pump_in_water(moved, inflow_temperature)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(with_coolant: bool) -> PlantBuilder {
        let mut b = PlantBuilder::new(PlantConfig::default());
        let core = b.core("core");
        let sink = b.sink("sink");
        let pump = b.mover("pump");
        let cool = b.mover("cool");
        b.connect(core, sink).connect(sink, pump).connect(pump, core);
        if with_coolant {
            b.coolant(cool);
        }
        b
    }

    #[test]
    fn standard_plant_names_resolve() {
        let plant = Plant::standard(&PlantConfig::default()).unwrap();
        for name in [
            "reactor", "condenser", "branch1", "branch2", "branch3", "branch4", "valve1",
            "valve2", "turbine", "pump1", "pump2", "coolant_pump",
        ] {
            assert!(plant.find(name).is_ok(), "{name}");
        }
        assert_eq!(plant.coolant(), plant.find("coolant_pump").unwrap());
        assert!(matches!(plant.find("pump9"), Err(SimError::Topology { .. })));
    }

    #[test]
    fn media_follow_loop_side() {
        let plant = Plant::standard(&PlantConfig::default()).unwrap();
        let medium = |name: &str| plant.flow(plant.find(name).unwrap()).unwrap().medium();
        assert_eq!(medium("reactor"), Medium::Steam);
        assert_eq!(medium("turbine"), Medium::Steam);
        assert_eq!(medium("branch2"), Medium::Steam);
        assert_eq!(medium("condenser"), Medium::Water);
        assert_eq!(medium("pump1"), Medium::Water);
        assert_eq!(medium("coolant_pump"), Medium::Water);
    }

    #[test]
    fn builder_requires_coolant() {
        let err = ring(false).build().unwrap_err();
        assert!(matches!(err, SimError::InvalidArg { .. }));
        assert!(ring(true).build().is_ok());
    }

    #[test]
    fn generator_must_be_spinner() {
        let mut b = ring(true);
        b.generator(NodeId::from_index(2));
        assert!(matches!(b.build(), Err(SimError::Topology { .. })));
    }

    #[test]
    fn accessors_check_node_kind() {
        let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
        let valve = plant.find("valve1").unwrap();
        let pump = plant.find("pump1").unwrap();
        assert!(plant.throttle(valve).unwrap().is_open());
        assert!(matches!(plant.mover(valve), Err(SimError::Topology { .. })));
        assert!(matches!(
            plant.set_pump_rpm(valve, 10),
            Err(SimError::Topology { .. })
        ));
        assert!(matches!(
            plant.set_valve(pump, false),
            Err(SimError::Topology { .. })
        ));
        assert_eq!(
            plant.fail(valve),
            Err(SimError::NotRepairable {
                node: valve,
                role: NodeRole::Throttle
            })
        );
        let err = plant.request_repair(plant.find("branch1").unwrap()).unwrap_err();
        assert!(err.to_string().contains("Branch"));
    }

    #[test]
    fn rejected_setpoints_change_nothing() {
        let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
        let pump = plant.find("pump1").unwrap();
        assert!(matches!(
            plant.set_control_rods(101),
            Err(SimError::InvalidSetpoint { .. })
        ));
        assert!(matches!(
            plant.set_pump_rpm(pump, 1001),
            Err(SimError::InvalidSetpoint { .. })
        ));
        assert_eq!(plant.reactor().control_rods(), 100);
        assert_eq!(plant.mover(pump).unwrap().rpm(), 0);
    }

    #[test]
    fn pump_switch_and_rpm() {
        let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
        let pump = plant.find("pump2").unwrap();
        plant.set_pump_on(pump, false).unwrap();
        assert!(!plant.mover(pump).unwrap().is_on());
        plant.set_pump_rpm(pump, 300).unwrap();
        assert!(plant.mover(pump).unwrap().is_on());
        assert_eq!(plant.mover(pump).unwrap().effective_rpm(), 300);
    }

    #[test]
    fn failing_cancels_repair() {
        let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
        let turbine = plant.find("turbine").unwrap();
        assert!(!plant.request_repair(turbine).unwrap());

        plant.fail(turbine).unwrap();
        assert_eq!(plant.failed_components(), vec![turbine]);
        assert!(plant.request_repair(turbine).unwrap());
        assert!(!plant.request_repair(turbine).unwrap());
        assert_eq!(plant.repair_remaining(turbine), Some(5));

        plant.fail(turbine).unwrap();
        assert_eq!(plant.repair_remaining(turbine), None);
    }

    #[test]
    fn power_comes_from_generator_spinners() {
        let mut plant = Plant::standard(&PlantConfig::default()).unwrap();
        let turbine = plant.find("turbine").unwrap();
        if let Some(PlantNode::Spinner(s)) = plant.nodes.get_mut(turbine.slot()) {
            s.update(300);
        }
        assert_eq!(plant.power_output(), 28);
    }
}
