//! Symbol lists per asset category.

pub(super) const SYNTHETIC: &[&str] = &["gainx400", "gainx600"];

pub(super) const FOREX: &[&str] = &[
    "AUDCAD", "AUDCHF", "AUDJPY", "AUDNZD", "AUDUSD",
    "CADCHF", "CADJPY", "CHFJPY",
    "EURAUD", "EURCAD", "EURCHF", "EURGBP", "EURHUF", "EURJPY", "EURNOK", "EURNZD", "EURPLN",
    "EURSEK", "EURSGD", "EURTRY", "EURUSD", "EURZAR",
    "GBPAUD", "GBPCAD", "GBPCHF", "GBPJPY", "GBPNZD", "GBPSEK", "GBPUSD",
    "NZDCAD", "NZDCHF", "NZDJPY", "NZDUSD",
    "TRYJPY",
    "USDCAD", "USDCHF", "USDCNH", "USDHKD", "USDHUF", "USDJPY", "USDMXN", "USDNOK", "USDPLN",
    "USDSEK", "USDSGD", "USDTRY", "USDZAR",
];
