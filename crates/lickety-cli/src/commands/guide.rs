use lickety_core::guide_cards;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("How to Play");
    println!();
    for card in guide_cards() {
        println!("{} {}", card.icon, card.title);
        println!("   {}", card.description);
        println!();
    }
    Ok(())
}
