//! Curated diagram content. The cross links are hand-picked, not derived.

pub const OUTER_LABELS: &[&str] = &[
	"Structural Engineering",
	"Mathematics",
	"Artificial Intelligence",
	"Programming",
	"Bridge Design",
	"Concrete Technology",
	"Sustainability",
	"Automation",
	"Design Optimization",
	"Project Management",
];

pub const INNER_LABELS: &[&str] = &[
	"Finite Element Analysis",
	"Machine Learning",
	"Deep Learning",
	"Structural Dynamics",
	"Earthquake Engineering",
	"Steel Structures",
	"Reinforced Concrete",
	"Computational Mechanics",
	"Data Analysis",
	"Python & MATLAB",
	"BIM & Digital Twins",
	"Smart Materials",
	"Sustainable Design",
	"Optimization Algorithms",
	"AI for Structural Health",
];

/// (outer index, inner index)
pub const CROSS_CONNECTIONS: &[(usize, usize)] = &[
	(0, 4),
	(0, 6),
	(1, 8),
	(1, 13),
	(2, 1),
	(2, 2),
	(2, 14),
	(3, 9),
	(4, 0),
	(4, 3),
	(5, 6),
	(6, 12),
	(7, 13),
	(8, 10),
	(9, 8),
	(9, 11),
];
