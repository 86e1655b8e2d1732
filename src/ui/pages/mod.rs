pub mod efficiency;
pub mod rarity;

pub use efficiency::EfficiencyPage;
pub use rarity::RarityPage;
