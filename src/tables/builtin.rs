//! Compiled-in factor tables.
//!
//! Each factor is the number of that unit in one reference unit of the
//! category. Reference units: nanometer, square millimeter, milliliter and
//! atomic mass unit.

pub(super) const LENGTH: [(&str, f64); 11] = [
    ("nanometer", 1.0),
    ("micrometer", 1e-3),
    ("millimeter", 1e-6),
    ("centimeter", 1e-7),
    ("inch", 3.93701e-8),
    ("foot", 3.28084e-9),
    ("yard", 1.09361e-9),
    ("meter", 1e-9),
    ("mile", 6.21371e-13),
    ("kilometer", 1e-12),
    ("light year", 1.057e-25),
];

pub(super) const AREA: [(&str, f64); 7] = [
    ("square millimeter", 1.0),
    ("square centimeter", 0.01),
    ("square meter", 0.000001),
    ("acre", 2.47105e-10),
    ("hectare", 1e-10),
    ("square kilometer", 1e-12),
    ("square mile", 3.86102e-13),
];

pub(super) const VOLUME: [(&str, f64); 23] = [
    ("milliliter", 1.0),
    ("liter", 0.001),
    ("us gallon", 0.0002641722),
    ("us quart", 0.0010566887),
    ("us pint", 0.0021133774),
    ("us cup", 0.0042267548),
    ("us fluid ounce", 0.0338140386),
    ("us table spoon", 0.0676280773),
    ("us tea spoon", 0.2028842318),
    ("imperial gallon", 0.0002199692),
    ("imperial quart", 0.000879877),
    ("imperial pint", 0.001759754),
    ("imperial fluid ounce", 0.0351950797),
    ("imperial table spoon", 0.0563121276),
    ("imperial tea spoon", 0.1689363827),
    ("cubic meter", 0.000001),
    ("cubic kilometer", 1e-18),
    ("cubic centimeter", 1.0),
    ("cubic millimeter", 1000.0),
    ("cubic mile", 2.399128636e-19),
    ("cubic inch", 0.0610237441),
    ("cubic foot", 0.0000353147),
    ("cubic yard", 0.000001308),
];

pub(super) const WEIGHT: [(&str, f64); 10] = [
    ("atomic mass unit", 1.0),
    ("milligram", 1.660540199e-21),
    ("carat", 8.302700999e-24),
    ("gram", 1.660540199e-24),
    ("ounce", 5.85738796e-26),
    ("pound", 3.660867475e-27),
    ("kilogram", 1.660540199e-27),
    ("short ton", 1.830433737e-30),
    ("metric ton", 1.660540199e-30),
    ("long ton", 1.634315837e-30),
];
