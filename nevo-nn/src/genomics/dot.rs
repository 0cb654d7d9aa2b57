//! Graphviz DOT rendering of genomes.

use crate::genomics::NeatGenome;

/// Builds up a simple Graphviz graph one statement at a time.
struct DotWriter {
    lines: Vec<String>,
}

impl DotWriter {
    fn new() -> DotWriter {
        DotWriter { lines: Vec::new() }
    }

    fn graph_param(&mut self, name: &str, value: &str) {
        self.lines.push(format!("{}=\"{}\";", name, value));
    }

    fn min_rank(&mut self, nodes: &[String]) {
        self.lines
            .push(format!("{{rank=min; {};}}", nodes.join("; ")));
    }

    fn max_rank(&mut self, nodes: &[String]) {
        self.lines
            .push(format!("{{rank=max; {};}}", nodes.join("; ")));
    }

    fn node(&mut self, name: &str, label: &str, color: &str) {
        self.lines.push(format!(
            "{} [label=\"{}\", color=\"{}\", shape=rect];",
            name, label, color
        ));
    }

    fn edge(&mut self, from: &str, to: &str, label: &str, color: &str) {
        self.lines.push(format!(
            "{} -> {} [label=\"{}\", color=\"{}\"];",
            from, to, label, color
        ));
    }

    fn dot(&self) -> String {
        format!("digraph G {{\n\t{}\n}}", self.lines.join("\n\t"))
    }
}

impl NeatGenome {
    /// Renders the genome in the DOT language, for visualisation with
    /// Graphviz. Inputs are ranked first and drawn green, outputs ranked
    /// last and drawn red; recurrent synapses are drawn red.
    ///
    /// The output cannot be used to recreate the genome; use the JSON
    /// form for persistence.
    pub fn render_dot(&self, width: f64, height: f64) -> String {
        let mut writer = DotWriter::new();
        writer.graph_param("rankdir", "LR");
        writer.graph_param("ratio", "fill");
        writer.graph_param("size", &format!("{},{}", width, height));
        writer.graph_param("layout", "dot");

        let mut input_ranks = Vec::new();
        let mut output_ranks = Vec::new();

        for (position, &neuron) in self.neuron_order().iter().enumerate() {
            let name = format!("N{}", neuron);
            let label = format!(
                "N{} [{}]\\n{}",
                neuron,
                position,
                self.activation_of(neuron)
                    .expect("every ordered neuron has an activation"),
            );
            let color = if position < self.num_inputs() {
                input_ranks.push(name.clone());
                "green"
            } else if position >= self.num_neurons() - self.num_outputs() {
                output_ranks.push(name.clone());
                "red"
            } else {
                "black"
            };
            writer.node(&name, &label, color);
        }

        writer.min_rank(&input_ranks);
        writer.max_rank(&output_ranks);

        for (sid, endpoints, weight) in self.synapses() {
            let from_pos = self
                .position_of(endpoints.from)
                .expect("synapse endpoints are ordered neurons");
            let to_pos = self
                .position_of(endpoints.to)
                .expect("synapse endpoints are ordered neurons");
            let color = if from_pos >= to_pos { "red" } else { "black" };
            writer.edge(
                &format!("N{}", endpoints.from),
                &format!("N{}", endpoints.to),
                &format!("C{}\\n{:.3}", sid, weight),
                color,
            );
        }

        writer.dot()
    }
}

#[cfg(test)]
mod tests {
    use crate::genomics::{Activation, NeatGenome};
    use nevo::Counter;

    #[test]
    fn rendering_mentions_every_neuron_and_synapse() {
        let counter = Counter::new();
        let mut genome = NeatGenome::new(&counter, 2, 1, Activation::Sigmoid);
        while !genome.add_random_synapse(&counter, 0.5, false) {}

        let dot = genome.render_dot(16.0, 9.0);
        assert!(dot.starts_with("digraph G {"));
        for &neuron in genome.neuron_order() {
            assert!(dot.contains(&format!("N{} ", neuron)));
        }
        for (sid, _, _) in genome.synapses() {
            assert!(dot.contains(&format!("C{}", sid)));
        }
    }
}
