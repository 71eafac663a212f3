/// One raw line of a corpus file with its terminator stripped.
/// Examples: `# sent_id = 1863-kulish_0012`, `3	землі	земля	NOUN	...`
pub type Line = String;
