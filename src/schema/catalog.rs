//! The builtin node-type catalog.
//!
//! One schema per node type the consumer's node library exposes, with the
//! property inventory, defaults and legal ranges its deserializer expects.
//! Declared property order here is the key order of the emitted document.

use super::types::NodeTypeSchema;
use ahash::AHashMap;

const MAX_SEED: i64 = 127_999;

/// Registers every builtin schema into `registry`.
pub(crate) fn register_builtin_schemas(registry: &mut AHashMap<String, NodeTypeSchema>) {
    let schemas = [
        // Generators
        NodeTypeSchema::new("Mountain")
            .float("Scale", 1.0, 0.0, 4.0)
            .float("Height", 0.5, 0.0, 1.0)
            .choice("Style", "Basic", &["Basic", "Eroded", "Old", "Alpine", "Strata"])
            .choice("Bulk", "Medium", &["Low", "Medium", "High"])
            .integer("Seed", 0, 0, MAX_SEED)
            .output("Out"),
        NodeTypeSchema::new("Ridge")
            .float("Scale", 1.0, 0.0, 4.0)
            .float("Height", 0.5, 0.0, 1.0)
            .integer("Seed", 0, 0, MAX_SEED)
            .output("Out"),
        NodeTypeSchema::new("Island")
            .float("Size", 0.5, 0.0, 1.0)
            .float("Height", 0.5, 0.0, 1.0)
            .boolean("Beaches", true)
            .integer("Seed", 0, 0, MAX_SEED)
            .output("Out"),
        NodeTypeSchema::new("Volcano")
            .float("Scale", 1.0, 0.0, 4.0)
            .float("Height", 0.7, 0.0, 1.0)
            .float("Mouth", 0.3, 0.0, 1.0)
            .integer("Seed", 0, 0, MAX_SEED)
            .output("Out"),
        NodeTypeSchema::new("Perlin")
            .choice("Type", "Default", &["Default", "Ridged", "Billowy"])
            .float("Scale", 0.5, 0.0, 1.0)
            .integer("Octaves", 8, 1, 16)
            .float("Persistence", 0.5, 0.0, 1.0)
            .integer("Seed", 0, 0, MAX_SEED)
            .output("Out"),
        NodeTypeSchema::new("Constant")
            .float("Value", 0.5, 0.0, 1.0)
            .output("Out"),
        // Processors
        NodeTypeSchema::new("Erosion")
            .float("Duration", 0.04, 0.0, 1.0)
            // "Softness" is the legacy producer spelling.
            .float("RockSoftness", 0.4, 0.0, 1.0)
            .aliased("Softness")
            .float("Strength", 0.5, 0.0, 1.0)
            .float("Downcutting", 0.0, 0.0, 1.0)
            .integer("Seed", 0, 0, MAX_SEED)
            .input("In")
            .output("Out")
            .output("Flow")
            .output("Wear")
            .output("Deposits"),
        NodeTypeSchema::new("Rivers")
            .float("Water", 0.5, 0.0, 1.0)
            .float("Width", 0.5, 0.0, 1.0)
            .float("Depth", 0.5, 0.0, 1.0)
            .float("Downcutting", 0.1, 0.0, 1.0)
            .integer("Seed", 0, 0, MAX_SEED)
            .input("In")
            .output("Out")
            .output("Rivers"),
        NodeTypeSchema::new("Snow")
            .float("Duration", 0.3, 0.0, 1.0)
            .float("SnowLine", 0.7, 0.0, 1.0)
            .float("Melt", 0.0, 0.0, 1.0)
            .input("In")
            .output("Out")
            .output("Snow"),
        NodeTypeSchema::new("Thermal")
            .float("Duration", 0.5, 0.0, 1.0)
            .float("Strength", 0.5, 0.0, 1.0)
            .float("Angle", 30.0, 0.0, 90.0)
            .input("In")
            .output("Out"),
        NodeTypeSchema::new("Terraces")
            .integer("Levels", 12, 2, 256)
            .float("Uniformity", 0.5, 0.0, 1.0)
            .integer("Seed", 0, 0, MAX_SEED)
            .input("In")
            .output("Out"),
        NodeTypeSchema::new("Blur")
            .float("Radius", 0.25, 0.0, 1.0)
            .input("In")
            .output("Out"),
        NodeTypeSchema::new("Combine")
            .choice(
                "Mode",
                "Blend",
                &["Blend", "Add", "Subtract", "Multiply", "Max", "Min", "Screen"],
            )
            .float("Ratio", 0.5, 0.0, 1.0)
            .input("In")
            .input("Input2")
            .input("Mask")
            .output("Out"),
        NodeTypeSchema::new("Mixer")
            .choice("Mode", "Normal", &["Normal", "Additive", "Weighted"])
            .float("Strength", 1.0, 0.0, 1.0)
            .input("In")
            .input_multi("Layers")
            .output("Out"),
        // Coloring and output
        NodeTypeSchema::new("SatMap")
            .choice("Library", "Rock", &["Rock", "Green", "Sand", "Blue", "Color"])
            .integer("LibraryItem", 0, 0, 500)
            .choice("Enhance", "Autolevel", &["None", "Autolevel", "Equalize"])
            .boolean("Reverse", false)
            .input("In")
            .output("Out"),
        NodeTypeSchema::new("Export")
            .text("Filename", "Export")
            .choice("Format", "PNG", &["PNG", "TIFF", "EXR", "RAW"])
            .aliased("FileFormat")
            .choice("BitDepth", "16", &["8", "16", "32"])
            .input("In")
            .output("Out"),
    ];

    for schema in schemas {
        registry.insert(schema.type_name.clone(), schema);
    }
}
