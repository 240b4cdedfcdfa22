use asciitable::{Border, Column, TableBuilder};

struct Planet {
    num: u32,
    name: &'static str,
    diameter: f64,
    mass: f64,
    atmosphere: &'static str,
}

fn columns() -> Vec<asciitable::ColumnData<Planet>> {
    vec![
        Column::new().with(|planet: &Planet| planet.num.to_string()),
        Column::new()
            .header("Name")
            .with(|planet: &Planet| planet.name.to_string()),
        Column::new()
            .header("Diameter")
            .with(|planet: &Planet| format!("{:.3}", planet.diameter)),
        Column::new()
            .header("Mass")
            .with(|planet: &Planet| format!("{:.2}", planet.mass)),
        Column::new()
            .header("Atmosphere")
            .with(|planet: &Planet| planet.atmosphere.to_string()),
    ]
}

fn main() -> Result<(), asciitable::TableError> {
    let planets = vec![
        Planet {
            num: 1,
            name: "Mercury",
            diameter: 0.382,
            mass: 0.06,
            atmosphere: "minimal",
        },
        Planet {
            num: 2,
            name: "Venus",
            diameter: 0.949,
            mass: 0.82,
            atmosphere: "Carbon dioxide, Nitrogen",
        },
        Planet {
            num: 3,
            name: "Earth",
            diameter: 1.0,
            mass: 1.0,
            atmosphere: "Nitrogen, Oxygen, Argon",
        },
        Planet {
            num: 4,
            name: "Mars",
            diameter: 0.532,
            mass: 0.11,
            atmosphere: "Carbon dioxide, Nitrogen, Argon",
        },
    ];

    for border in [Border::BASIC_ASCII, Border::FANCY_ASCII, Border::NO_BORDERS] {
        let table = TableBuilder::new()
            .border(border)
            .objects(&planets, columns())
            .render()?;
        println!("{table}\n");
    }
    Ok(())
}
