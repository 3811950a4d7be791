//! Seed fixture — the category lookup list and the historical case set.
//!
//! Seeding is decoupled from schema creation: the DDL in [`crate::schema`]
//! only creates empty tables, and [`SqliteStore::seed_if_empty`] applies this
//! fixture once per empty-table condition. Running it against a populated
//! store is a no-op, never an error.
//!
//! [`SqliteStore::seed_if_empty`]: crate::SqliteStore::seed_if_empty

/// The fixed ten-category classification list.
pub const SEED_CATEGORIES: [(&str, &str); 10] = [
  ("Ponzi Scheme", "Investment fraud promising high returns"),
  ("Insurance Fraud", "False claims or deliberate damage"),
  ("Bank Fraud", "Fraud involving banking systems"),
  ("Identity Theft", "Using someone else's identity"),
  ("Cyber Fraud", "Online scams and hacking"),
  ("Public Sector Fraud", "Government-related corruption"),
  ("Corporate Fraud", "Company financial misrepresentation"),
  ("Tax Evasion", "Illegal avoidance of tax payments"),
  ("Money Laundering", "Processing illicit funds"),
  ("Procurement Fraud", "Bid rigging, kickbacks in purchasing"),
];

/// One row of the historical fixture, in column order.
pub struct SeedCase {
  pub name:        &'static str,
  pub case_type:   &'static str,
  pub description: &'static str,
  pub location:    &'static str,
  pub amount:      f64,
  pub currency:    &'static str,
  pub detected:    &'static str,
  pub reported:    &'static str,
  pub resolved:    Option<&'static str>,
  pub parties:     &'static str,
  pub agency:      &'static str,
  pub court_ref:   Option<&'static str>,
  pub source_url:  Option<&'static str>,
  pub severity:    &'static str,
}

/// Historical southern-African fraud cases loaded into an empty store.
pub const SEED_CASES: &[SeedCase] = &[
  SeedCase {
    name:       "Zimbabwe Gold Scam 2023",
    case_type:  "Ponzi Scheme",
    description: "Investors defrauded in fake gold scheme",
    location:   "Harare",
    amount:     2_500_000.0,
    currency:   "USD",
    detected:   "2023-05-15",
    reported:   "2023-06-01",
    resolved:   None,
    parties:    "XYZ Investment, ABC Bank",
    agency:     "ZRP Commercial Crimes",
    court_ref:  Some("HC 1234/23"),
    source_url: Some("https://www.zimbabwesituation.com/news/gold-scam"),
    severity:   "High",
  },
  SeedCase {
    name:       "NSSA Pension Fraud",
    case_type:  "Public Sector Fraud",
    description: "Misuse of pension funds",
    location:   "Nationwide",
    amount:     50_000_000.0,
    currency:   "USD",
    detected:   "2018-01-01",
    reported:   "2019-03-15",
    resolved:   Some("2022-08-20"),
    parties:    "NSSA officials",
    agency:     "ZACC",
    court_ref:  Some("HC 5678/19"),
    source_url: Some("https://www.newsday.co.zw/nssa-scandal"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "BancABC Internal Fraud",
    case_type:  "Bank Fraud",
    description: "Employee siphoned client funds",
    location:   "Bulawayo",
    amount:     120_000.0,
    currency:   "USD",
    detected:   "2022-11-10",
    reported:   "2022-11-15",
    resolved:   Some("2023-02-28"),
    parties:    "Bank employee",
    agency:     "Internal Audit",
    court_ref:  Some("MC 9012/22"),
    source_url: None,
    severity:   "Medium",
  },
  SeedCase {
    name:       "Harare City Housing Scam",
    case_type:  "Public Sector Fraud",
    description: "Illegal sale of council land",
    location:   "Harare",
    amount:     3_500_000.0,
    currency:   "USD",
    detected:   "2020-07-01",
    reported:   "2021-01-10",
    resolved:   None,
    parties:    "Council officials, Developers",
    agency:     "ZACC",
    court_ref:  Some("HC 3456/21"),
    source_url: Some("https://www.herald.co.zw/city-housing-scam"),
    severity:   "High",
  },
  SeedCase {
    name:       "EcoCash Fraud Ring",
    case_type:  "Cyber Fraud",
    description: "SIM swap fraud targeting mobile money",
    location:   "Nationwide",
    amount:     850_000.0,
    currency:   "USD",
    detected:   "2021-03-01",
    reported:   "2021-04-15",
    resolved:   Some("2022-05-10"),
    parties:    "15 suspects",
    agency:     "ZRP Cyber Crime",
    court_ref:  Some("HC 7890/21"),
    source_url: Some("https://www.techzim.co.zw/ecocash-fraud"),
    severity:   "High",
  },
  SeedCase {
    name:       "ZIMRA Tax Evasion",
    case_type:  "Tax Evasion",
    description: "Undervaluation of imports",
    location:   "Beitbridge",
    amount:     12_000_000.0,
    currency:   "USD",
    detected:   "2019-05-01",
    reported:   "2020-02-20",
    resolved:   Some("2021-11-15"),
    parties:    "Clearing agents, Businesses",
    agency:     "ZIMRA",
    court_ref:  Some("HC 2345/20"),
    source_url: Some("https://www.chronicle.co.zw/zimra-case"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Cottco Manager Fraud",
    case_type:  "Corporate Fraud",
    description: "Ghost workers payroll fraud",
    location:   "Gweru",
    amount:     450_000.0,
    currency:   "USD",
    detected:   "2022-02-01",
    reported:   "2022-03-10",
    resolved:   Some("2022-09-30"),
    parties:    "HR Manager",
    agency:     "Internal Audit",
    court_ref:  None,
    source_url: None,
    severity:   "Medium",
  },
  SeedCase {
    name:       "COVID-19 Fund Misuse",
    case_type:  "Public Sector Fraud",
    description: "Diverted pandemic relief funds",
    location:   "Nationwide",
    amount:     3_000_000.0,
    currency:   "USD",
    detected:   "2020-06-01",
    reported:   "2021-01-05",
    resolved:   None,
    parties:    "Govt officials",
    agency:     "ZACC",
    court_ref:  Some("HC 6789/21"),
    source_url: Some("https://www.newzimbabwe.com/covid-funds"),
    severity:   "High",
  },
  SeedCase {
    name:       "ZSE Insider Trading",
    case_type:  "Corporate Fraud",
    description: "Illegal share trading",
    location:   "Harare",
    amount:     1_800_000.0,
    currency:   "USD",
    detected:   "2021-07-01",
    reported:   "2021-09-15",
    resolved:   Some("2022-04-20"),
    parties:    "Stockbrokers, Executives",
    agency:     "SECZ",
    court_ref:  Some("HC 1234/21"),
    source_url: Some("https://www.businessweekly.co.zw/zse-case"),
    severity:   "High",
  },
  SeedCase {
    name:       "Fuel Coupon Scam",
    case_type:  "Procurement Fraud",
    description: "Fraudulent fuel procurement",
    location:   "Nationwide",
    amount:     7_500_000.0,
    currency:   "USD",
    detected:   "2017-01-01",
    reported:   "2018-03-01",
    resolved:   Some("2020-12-15"),
    parties:    "Govt officials, Suppliers",
    agency:     "ZACC",
    court_ref:  Some("HC 4567/18"),
    source_url: Some("https://www.sundaymail.co.zw/fuel-scam"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Chinhoyi Ponzi Scheme 2025",
    case_type:  "Ponzi Scheme",
    description: "Investors promised high returns",
    location:   "Chinhoyi",
    amount:     197_300.0,
    currency:   "USD",
    detected:   "2025-04-15",
    reported:   "2025-04-20",
    resolved:   None,
    parties:    "2 suspects",
    agency:     "ZRP Commercial Crimes",
    court_ref:  Some("CRB 1234/25"),
    source_url: Some("https://lawportalzim.co.zw/cases/criminal/213/fraud-and-criminal-promise"),
    severity:   "High",
  },
  SeedCase {
    name:       "Insurance Fraud Harare",
    case_type:  "Insurance Fraud",
    description: "False claims submission",
    location:   "Harare",
    amount:     1_000_000.0,
    currency:   "ZWL",
    detected:   "2025-04-10",
    reported:   "2025-04-12",
    resolved:   None,
    parties:    "Insurance client",
    agency:     "Insurance Council",
    court_ref:  Some("CRB 5678/25"),
    source_url: Some("https://lawportalzim.co.zw/cases/criminal/215/insurance-fraud"),
    severity:   "Medium",
  },
  SeedCase {
    name:       "Fake ID Syndicate",
    case_type:  "Identity Theft",
    description: "Production of fake IDs",
    location:   "Bulawayo",
    amount:     0.0,
    currency:   "USD",
    detected:   "2025-04-05",
    reported:   "2025-04-08",
    resolved:   None,
    parties:    "5 suspects",
    agency:     "ZRP CID",
    court_ref:  Some("CRB 9012/25"),
    source_url: Some("https://lawportalzim.co.zw/cases/criminal/217/fake-ids"),
    severity:   "High",
  },
  SeedCase {
    name:       "Forex Fraud Harare",
    case_type:  "Bank Fraud",
    description: "Illegal forex trading",
    location:   "Harare",
    amount:     322_000.0,
    currency:   "USD",
    detected:   "2025-03-28",
    reported:   "2025-04-01",
    resolved:   None,
    parties:    "Forex dealer",
    agency:     "RBZ Financial Intelligence",
    court_ref:  Some("CRB 3456/25"),
    source_url: Some("https://lawportalzim.co.zw/cases/criminal/219/forex-fraud"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Health Insurance Fraud",
    case_type:  "Insurance Fraud",
    description: "False medical claims",
    location:   "Nationwide",
    amount:     0.0,
    currency:   "USD",
    detected:   "2025-03-20",
    reported:   "2025-03-25",
    resolved:   None,
    parties:    "Medical providers",
    agency:     "Insurance Council",
    court_ref:  None,
    source_url: Some("https://lawportalzim.co.zw/cases/criminal/221/health-fraud"),
    severity:   "Medium",
  },
  SeedCase {
    name:       "Zimbabwe Housing Scam 2000s",
    case_type:  "Public Sector Fraud",
    description: "Illegal land allocations",
    location:   "Harare",
    amount:     50_000_000.0,
    currency:   "USD",
    detected:   "2005-01-01",
    reported:   "2007-03-15",
    resolved:   Some("2010-12-20"),
    parties:    "Government officials",
    agency:     "ZACC",
    court_ref:  Some("HC 1234/07"),
    source_url: Some("https://www.herald.co.zw/housing-scandal"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Zimbabwe Bank Closure 2004",
    case_type:  "Bank Fraud",
    description: "Bank collapse due to fraud",
    location:   "Nationwide",
    amount:     300_000_000.0,
    currency:   "USD",
    detected:   "2004-01-01",
    reported:   "2004-03-01",
    resolved:   Some("2006-05-15"),
    parties:    "Bank executives",
    agency:     "RBZ",
    court_ref:  Some("HC 5678/04"),
    source_url: Some("https://www.financialgazette.co.zw/bank-collapse"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Zimbabwe Diamond Fraud",
    case_type:  "Public Sector Fraud",
    description: "Diamond revenue leakages",
    location:   "Marange",
    amount:     2_000_000_000.0,
    currency:   "USD",
    detected:   "2008-01-01",
    reported:   "2012-03-01",
    resolved:   None,
    parties:    "Mining companies, Officials",
    agency:     "ZACC",
    court_ref:  Some("HC 9012/12"),
    source_url: Some("https://www.zimbabwesituation.com/diamond-report"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Zimbabwe Command Agric",
    case_type:  "Public Sector Fraud",
    description: "Misuse of farming inputs",
    location:   "Nationwide",
    amount:     3_000_000_000.0,
    currency:   "USD",
    detected:   "2016-01-01",
    reported:   "2019-01-01",
    resolved:   None,
    parties:    "Govt officials, Suppliers",
    agency:     "ZACC",
    court_ref:  Some("HC 3456/19"),
    source_url: Some("https://www.newsday.co.zw/command-agric"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Zimbabwe Fuel Scam 2019",
    case_type:  "Procurement Fraud",
    description: "Fraudulent fuel imports",
    location:   "Nationwide",
    amount:     1_500_000_000.0,
    currency:   "USD",
    detected:   "2019-01-01",
    reported:   "2019-07-01",
    resolved:   None,
    parties:    "Fuel companies, Officials",
    agency:     "ZACC",
    court_ref:  Some("HC 7890/19"),
    source_url: Some("https://www.sundaymail.co.zw/fuel-imports"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "VBS Bank Heist SA",
    case_type:  "Bank Fraud",
    description: "Looting of municipal funds",
    location:   "South Africa",
    amount:     2_000_000_000.0,
    currency:   "ZAR",
    detected:   "2016-01-01",
    reported:   "2018-03-01",
    resolved:   Some("2021-06-15"),
    parties:    "Bank executives",
    agency:     "Hawks",
    court_ref:  Some("GPV 1234/18"),
    source_url: Some("https://www.dailymaverick.co.za/vbs-bank"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Steinhoff Scandal",
    case_type:  "Corporate Fraud",
    description: "Accounting irregularities",
    location:   "South Africa",
    amount:     10_000_000_000.0,
    currency:   "ZAR",
    detected:   "2015-01-01",
    reported:   "2017-12-01",
    resolved:   None,
    parties:    "Company executives",
    agency:     "JSE",
    court_ref:  Some("GPV 5678/17"),
    source_url: Some("https://www.businesslive.co.za/steinhoff"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Tongaat Hulett Fraud",
    case_type:  "Corporate Fraud",
    description: "Revenue overstatement",
    location:   "South Africa",
    amount:     6_500_000_000.0,
    currency:   "ZAR",
    detected:   "2014-01-01",
    reported:   "2019-05-01",
    resolved:   Some("2022-03-15"),
    parties:    "Company executives",
    agency:     "JSE",
    court_ref:  Some("GPV 9012/19"),
    source_url: Some("https://www.moneyweb.co.za/tongaat"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Eswatini Health Fraud",
    case_type:  "Public Sector Fraud",
    description: "COVID funds misappropriation",
    location:   "Eswatini",
    amount:     250_000_000.0,
    currency:   "SZL",
    detected:   "2020-06-01",
    reported:   "2021-03-01",
    resolved:   None,
    parties:    "Health officials",
    agency:     "Anti-Corruption",
    court_ref:  Some("HC 2345/21"),
    source_url: Some("https://www.times.co.sz/health-scandal"),
    severity:   "High",
  },
  SeedCase {
    name:       "Zambia Fire Tender Scam",
    case_type:  "Procurement Fraud",
    description: "Overpriced fire trucks",
    location:   "Zambia",
    amount:     42_000_000.0,
    currency:   "USD",
    detected:   "2017-01-01",
    reported:   "2018-01-01",
    resolved:   Some("2020-06-15"),
    parties:    "Govt officials",
    agency:     "ACC",
    court_ref:  Some("HC 6789/18"),
    source_url: Some("https://www.lusakatimes.com/fire-tenders"),
    severity:   "High",
  },
  SeedCase {
    name:       "Malawi Cashgate",
    case_type:  "Public Sector Fraud",
    description: "Looting of govt funds",
    location:   "Malawi",
    amount:     32_000_000.0,
    currency:   "USD",
    detected:   "2013-01-01",
    reported:   "2013-09-01",
    resolved:   Some("2016-12-15"),
    parties:    "Civil servants",
    agency:     "ACB",
    court_ref:  Some("HC 1234/13"),
    source_url: Some("https://www.nyasatimes.com/cashgate"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Namibia Fishrot",
    case_type:  "Public Sector Fraud",
    description: "Fishing quotas corruption",
    location:   "Namibia",
    amount:     150_000_000.0,
    currency:   "NAD",
    detected:   "2014-01-01",
    reported:   "2019-11-01",
    resolved:   None,
    parties:    "Ministers, Businessmen",
    agency:     "ACU",
    court_ref:  Some("HC 5678/19"),
    source_url: Some("https://www.namibian.com.na/fishrot"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Botswana Housing Scam",
    case_type:  "Public Sector Fraud",
    description: "Irregular land allocation",
    location:   "Botswana",
    amount:     50_000_000.0,
    currency:   "BWP",
    detected:   "2018-01-01",
    reported:   "2019-03-01",
    resolved:   Some("2021-06-15"),
    parties:    "Council officials",
    agency:     "DCEC",
    court_ref:  Some("HC 9012/19"),
    source_url: Some("https://www.mmegi.bw/housing-scam"),
    severity:   "High",
  },
  SeedCase {
    name:       "Mozambique Tuna Bonds",
    case_type:  "Public Sector Fraud",
    description: "Hidden govt debt",
    location:   "Mozambique",
    amount:     2_000_000_000.0,
    currency:   "USD",
    detected:   "2013-01-01",
    reported:   "2016-04-01",
    resolved:   None,
    parties:    "Govt officials, Bankers",
    agency:     "Public Prosecutor",
    court_ref:  Some("HC 3456/16"),
    source_url: Some("https://www.zitamar.com/tuna-bonds"),
    severity:   "Critical",
  },
  SeedCase {
    name:       "Kenya NYS Scandal",
    case_type:  "Public Sector Fraud",
    description: "Theft of youth funds",
    location:   "Kenya",
    amount:     800_000_000.0,
    currency:   "KES",
    detected:   "2015-01-01",
    reported:   "2018-05-01",
    resolved:   None,
    parties:    "Govt officials",
    agency:     "EACC",
    court_ref:  Some("HC 7890/18"),
    source_url: Some("https://www.nation.co.ke/nys"),
    severity:   "Critical",
  },
];
