use eframe::egui::{ScrollArea, Ui};

// ---------------------------------------------------------------------------
// Informational pages
// ---------------------------------------------------------------------------

pub fn about(ui: &mut Ui) {
    ui.heading("About");
    ui.add_space(8.0);
    ui.label(
        "This dashboard makes energy-related data from the American Community Survey \
         (ACS) easy to browse, alongside background material on energy topics. It is \
         meant for the general public and for researchers alike: students, policymakers, \
         or anyone curious about how energy use, sources and trends differ across states \
         and metropolitan areas. The goal is to support informed discussion and research \
         toward a more sustainable energy future.",
    );
}

pub fn energy_resources(ui: &mut Ui) {
    ui.heading("Energy Resources");
    ui.add_space(8.0);
    ui.label("Information about different energy resources and their uses.");
}

pub fn education_center(ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.heading("Education Center");
        ui.label(
            "Resources to help you understand energy resources, energy efficiency and \
             sustainability practices.",
        );

        ui.add_space(8.0);
        ui.heading("Introduction to Energy");
        ui.label(
            "Energy is the capacity to do work. It powers our homes, vehicles and the \
             technology we use every day. It takes many forms, including kinetic \
             (movement), thermal (heat) and electrical energy, and can come from renewable \
             sources like solar and wind or from non-renewable sources like fossil fuels.",
        );

        ui.add_space(8.0);
        ui.heading("Types of Energy Resources");

        ui.strong("Renewable Energy");
        ui.label("Renewable energy comes from sources that are naturally replenished:");
        for (name, text) in [
            ("Solar", "harnessed from sunlight with solar panels; clean and abundant."),
            ("Wind", "generated by turbines; one of the fastest-growing sources worldwide."),
            ("Hydropower", "produced by moving water in rivers and dams."),
            ("Geothermal", "heat from the Earth's interior, used for heating and power."),
            ("Biomass", "organic material such as wood or crop waste, burned or processed."),
        ] {
            ui.label(format!("• {name}: {text}"));
        }

        ui.add_space(6.0);
        ui.strong("Non-Renewable Energy");
        ui.label("Non-renewable sources are finite and will eventually run out:");
        for (name, text) in [
            ("Fossil fuels", "coal, oil and natural gas; burning them releases CO₂."),
            ("Nuclear", "splitting atoms in reactors; no CO₂, but radioactive waste."),
        ] {
            ui.label(format!("• {name}: {text}"));
        }
    });
}
