use anyhow::Context;
use roster::{
    sort_roster, DepartmentStatistics, Employee, HierarchyBuilder, NewEmployee, OrgResolver, RosterConfig, RosterSearch,
    RosterStore, SearchMode,
};
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Roster v{}", roster::version());
    println!("==========================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => RosterConfig::load(&path).with_context(|| format!("loading config from {}", path))?,
        None => RosterConfig::default(),
    };

    let mut store = RosterStore::new();
    load_sample_roster(&mut store, &config)?;

    demo_sorting_and_search(&store, &config);
    demo_hierarchy(&store, &config)?;
    demo_statistics(&store)?;

    Ok(())
}

fn load_sample_roster(store: &mut RosterStore, config: &RosterConfig) -> anyhow::Result<()> {
    let staff = [
        ("Amy", "Lee", "Music"),
        ("Ben", "Okoro", "Mathematics"),
        ("Carla", "Mendes", "Science"),
        ("Dev", "Patel", "Mathematics"),
        ("Erin", "Walsh", "Library"),
        ("Farid", "Aziz", "Science"),
        ("Gwen", "Lee", ""),
    ];

    let mut resolver = OrgResolver::new(store, &config.resolver);
    resolver.ensure_core_management()?;

    for (_, _, department) in staff {
        resolver.resolve_department(department);
    }
    let heads = resolver.create_department_heads()?;

    for (first, last, department) in staff {
        let email = format!("{}.{}@{}", first.to_lowercase(), last.to_lowercase(), config.resolver.email_domain);
        resolver.onboard(NewEmployee::new(first, last).with_email(email), department)?;
    }

    info!(
        "Loaded {} records, {} departments, {} new department heads",
        resolver.store().employee_count(),
        resolver.store().department_count(),
        heads
    );
    Ok(())
}

fn demo_sorting_and_search(store: &RosterStore, config: &RosterConfig) {
    println!("=== Sorted roster ({}) ===", config.search.key_order);
    let sorted = sort_roster(store.employees(), config.search.key_order);
    for employee in sorted.iter() {
        println!("  {:<10} {}", employee.code, employee.full_name());
    }

    println!("\n=== Search ===");
    let search = RosterSearch::with_config(&sorted, &config.search);
    for query in ["Amy Lee", "lee"] {
        let names: Vec<String> = search.find(query).into_vec().iter().map(|e| e.full_name()).collect();
        println!("  {} '{}': {:?}", search.mode(), query, names);
    }

    // Substring lookups need no ordering
    let records: Vec<&Employee> = store.employees().iter().collect();
    let hits = RosterSearch::unsorted(&records).find("an").len();
    println!("  {} 'an' over registration order: {} matches", SearchMode::Partial, hits);
}

fn demo_hierarchy(store: &RosterStore, config: &RosterConfig) -> anyhow::Result<()> {
    println!("\n=== Hierarchy ===");
    let tree = HierarchyBuilder::new(config.hierarchy.clone()).build(store);
    for level in tree.levels() {
        let labels: Vec<String> = level
            .entries
            .iter()
            .map(|e| match e.role_label() {
                Some(role) => format!("{} ({})", e.name, role),
                None => e.name.clone(),
            })
            .collect();
        println!("  Level {}: {}", level.level, labels.join(", "));
    }
    println!("  {}", serde_json::to_string(&tree.summary())?);
    Ok(())
}

fn demo_statistics(store: &RosterStore) -> anyhow::Result<()> {
    println!("\n=== Department statistics ===");
    let stats = DepartmentStatistics::collect(store);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
